//! Core data types for solar event calculations.

use crate::error::{check_coordinates, check_elevation_angle};
use crate::math::floor;
use crate::Result;
use core::fmt;

/// Depression of the Sun's centre below the horizon at standard sunrise and
/// sunset, in degrees. Covers atmospheric refraction and the solar semi-diameter.
pub const SUNRISE_SUNSET_DEPRESSION: f64 = 0.833;

/// Predefined horizons for sunrise/sunset and twilight calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (upper limb on the horizon, refraction included).
    /// For observers above sea level the depression shrinks, see
    /// [`horizon_depression`](crate::events::horizon_depression).
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -SUNRISE_SUNSET_DEPRESSION,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the depression below the horizon in degrees (positive downward).
    #[must_use]
    pub const fn depression(&self) -> f64 {
        -self.elevation_angle()
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_elevation_angle(elevation_degrees)?;
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Geographic position of an observer.
///
/// # Example
/// ```
/// # use solar_ephemeris::ObserverPosition;
/// let milan = ObserverPosition::new(45.46416, 9.19199).with_altitude(120.0);
/// assert_eq!(milan.altitude(), 120.0);
///
/// assert!(ObserverPosition::try_new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverPosition {
    /// Latitude in degrees, north positive
    latitude: f64,
    /// Longitude in degrees, east positive
    longitude: f64,
    /// Altitude above sea level in meters
    altitude: f64,
}

impl ObserverPosition {
    /// Creates a sea-level position without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    /// Creates a sea-level position, validating the coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` outside ±90° or `InvalidLongitude` for a non-finite longitude.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Returns a copy with the given altitude above sea level in meters.
    #[must_use]
    pub const fn with_altitude(self, altitude: f64) -> Self {
        Self { altitude, ..self }
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the altitude in meters.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }
}

/// Hours since midnight UTC, as a single decimal value.
///
/// Results of solar event calculations are not range-normalized:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// The accessors split the value the way a wall clock would: whole hours are
/// floored, then minutes, seconds and milliseconds are taken from the
/// remaining fraction, each truncated.
///
/// # Example
/// ```
/// # use solar_ephemeris::DecimalHours;
/// let sunrise = DecimalHours::from_hours(7.053_594_666);
/// assert_eq!(sunrise.whole_hours(), 7);
/// assert_eq!(sunrise.minutes(), 3);
/// assert_eq!(sunrise.seconds(), 12);
/// assert_eq!(sunrise.clock().to_string(), "07:03");
/// assert_eq!(sunrise.clock_with_seconds().to_string(), "07:03:12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DecimalHours(f64);

impl DecimalHours {
    /// Creates a new `DecimalHours` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Whole hours, `floor(hours)`.
    #[must_use]
    pub fn whole_hours(&self) -> i64 {
        floor(self.0) as i64
    }

    /// Minutes past the whole hour (0-59).
    #[must_use]
    pub fn minutes(&self) -> u32 {
        floor(self.fractional_minutes()) as u32
    }

    /// Seconds past the whole minute (0-59).
    #[must_use]
    pub fn seconds(&self) -> u32 {
        floor(self.fractional_seconds()) as u32
    }

    /// Milliseconds past the whole second (0-999).
    ///
    /// This counts within the second, not within the minute: 50:37.007 gives
    /// 7, not 37007. Use `seconds() * 1000 + milliseconds()` for the latter.
    #[must_use]
    pub fn milliseconds(&self) -> u32 {
        let seconds = self.fractional_seconds();
        (floor((seconds - floor(seconds)) * 1000.0) as u32).min(999)
    }

    /// Zero-padded `HH:MM` clock representation.
    #[must_use]
    pub const fn clock(&self) -> Clock {
        Clock {
            hours: *self,
            with_seconds: false,
        }
    }

    /// Zero-padded `HH:MM:SS` clock representation.
    #[must_use]
    pub const fn clock_with_seconds(&self) -> Clock {
        Clock {
            hours: *self,
            with_seconds: true,
        }
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where:
    /// - `day_offset`: whole days offset from the calculation date (negative = previous days, positive = following days)
    /// - `hours_in_day`: 0.0 to < 24.0
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::DecimalHours;
    /// let time = DecimalHours::from_hours(25.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }

    /// Anchors these hours to a calendar date, giving a UTC instant.
    ///
    /// Rounded to the nearest millisecond. Returns `None` if the date is
    /// invalid or the result is outside chrono's range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(
        &self,
        date: &crate::time::CivilTimestamp,
    ) -> Option<chrono::DateTime<chrono::Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        let millis = crate::math::round(self.0 * 3_600_000.0) as i64;
        date.at_midnight()
            .to_datetime()?
            .checked_add_signed(chrono::TimeDelta::try_milliseconds(millis)?)
    }

    fn fractional_minutes(&self) -> f64 {
        ((self.0 - floor(self.0)) * 60.0).min(59.999_999_999)
    }

    fn fractional_seconds(&self) -> f64 {
        let minutes = self.fractional_minutes();
        (minutes - floor(minutes)) * 60.0
    }
}

impl fmt::Display for DecimalHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.clock_with_seconds(), f)
    }
}

/// Zero-padded clock rendering of [`DecimalHours`].
///
/// Produced by [`DecimalHours::clock`] and [`DecimalHours::clock_with_seconds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    hours: DecimalHours,
    with_seconds: bool,
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}",
            self.hours.whole_hours(),
            self.hours.minutes()
        )?;
        if self.with_seconds {
            write!(f, ":{:02}", self.hours.seconds())?;
        }
        Ok(())
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// Solar events can vary significantly based on location and time of year,
/// especially at extreme latitudes where polar days and nights occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise, solar noon, and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar noon (when the sun crosses the meridian)
        noon: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the specified horizon all day
    AllDay {
        /// Time of solar noon (closest approach to zenith)
        noon: T,
    },
    /// Polar night - sun remains below the specified horizon all day
    AllNight {
        /// Time of solar noon (when sun is highest, though still below horizon)
        noon: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the solar noon for any sunrise result.
    pub const fn noon(&self) -> &T {
        match self {
            Self::RegularDay { noon, .. } | Self::AllDay { noon } | Self::AllNight { noon } => {
                noon
            }
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

impl SunriseResult<DecimalHours> {
    /// Time the sun spends above the horizon: `sunset - sunrise` on a regular
    /// day, 24 hours on a polar day, zero on a polar night.
    #[must_use]
    pub fn day_length(&self) -> DecimalHours {
        match self {
            Self::RegularDay {
                sunrise, sunset, ..
            } => DecimalHours::from_hours(sunset.hours() - sunrise.hours()),
            Self::AllDay { .. } => DecimalHours::from_hours(24.0),
            Self::AllNight { .. } => DecimalHours::from_hours(0.0),
        }
    }
}
