//! Sunrise, sunset, solar noon and day length.
//!
//! Event times are derived from the solar coordinates at 0h UTC of the date:
//! solar noon from the equation of time and the observer's longitude, and
//! the rise and set times from the hour angle at which the Sun's centre
//! crosses the requested depression below the horizon.

#![allow(clippy::unreadable_literal)]

use crate::coordinates::SolarCoordinates;
use crate::math::{
    abs, acos_deg, acot_deg, cos_deg, degrees_to_hours, sin_deg, sqrt, tan_deg,
};
use crate::time::CivilTimestamp;
use crate::types::{
    DecimalHours, Horizon, ObserverPosition, SUNRISE_SUNSET_DEPRESSION, SunriseResult,
};
use crate::{Error, Result};

/// Reduction of the sunrise/sunset depression per square root of meter of
/// observer altitude, in degrees.
const ALTITUDE_DEPRESSION_FACTOR: f64 = 0.0347;

/// Depression of the Sun's centre at sunrise/sunset for an observer at
/// `altitude` meters above sea level.
///
/// `h0 = 0.833 - 0.0347 * sqrt(altitude)`; negative altitudes count as sea level.
/// The depression shrinks with altitude and turns negative above roughly
/// 576 m, so higher observers get a later sunrise, an earlier sunset and a
/// shorter day.
///
/// # Example
/// ```
/// # use solar_ephemeris::events::horizon_depression;
/// assert_eq!(horizon_depression(0.0), 0.833);
/// assert_eq!(horizon_depression(-10.0), 0.833);
/// assert!((horizon_depression(100.0) - 0.486).abs() < 1e-12);
/// ```
#[must_use]
pub fn horizon_depression(altitude: f64) -> f64 {
    SUNRISE_SUNSET_DEPRESSION - ALTITUDE_DEPRESSION_FACTOR * sqrt(altitude.max(0.0))
}

/// Solar angles for one date and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngle {
    coordinates: SolarCoordinates,
    latitude: f64,
}

impl SolarAngle {
    /// Creates solar angles from precomputed coordinates.
    #[must_use]
    pub const fn new(coordinates: SolarCoordinates, latitude: f64) -> Self {
        Self {
            coordinates,
            latitude,
        }
    }

    /// Creates solar angles for the UTC date of `timestamp`.
    #[must_use]
    pub fn on(timestamp: &CivilTimestamp, latitude: f64) -> Self {
        Self::new(SolarCoordinates::on(timestamp), latitude)
    }

    /// Hour angle in degrees at which the Sun's centre is `depression`
    /// degrees below the horizon.
    ///
    /// `cos H = (-sin a - sin φ sin δ) / (cos φ cos δ)`
    ///
    /// # Errors
    /// Returns `SunNeverRises` when `cos H > 1` (the Sun stays below that
    /// depression all day) and `SunNeverSets` when `cos H < -1` (it stays above).
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::{Error, SolarAngle, time::CivilTimestamp};
    /// let midsummer = CivilTimestamp::from_date(2025, 6, 21);
    /// let tromso = SolarAngle::on(&midsummer, 69.65);
    /// assert!(matches!(tromso.hour_angle_at(0.833), Err(Error::SunNeverSets { .. })));
    ///
    /// let milan = SolarAngle::on(&midsummer, 45.46);
    /// assert!(milan.hour_angle_at(0.833).unwrap() > 90.0);
    /// ```
    pub fn hour_angle_at(&self, depression: f64) -> Result<f64> {
        let latitude = self.latitude;
        let declination = self.coordinates.declination();

        let cos_hour_angle = (-sin_deg(depression) - sin_deg(latitude) * sin_deg(declination))
            / (cos_deg(latitude) * cos_deg(declination));

        if cos_hour_angle > 1.0 {
            log::debug!(
                "sun stays {depression}° below the horizon at latitude {latitude} on {}",
                self.coordinates.date()
            );
            return Err(Error::sun_never_rises(cos_hour_angle));
        }
        if cos_hour_angle < -1.0 {
            log::debug!(
                "sun stays above {depression}° depression at latitude {latitude} on {}",
                self.coordinates.date()
            );
            return Err(Error::sun_never_sets(cos_hour_angle));
        }

        Ok(acos_deg(cos_hour_angle))
    }

    /// Hour angle in degrees at which an object's shadow is `ratio` times its
    /// height longer than its shadow at solar noon.
    ///
    /// The matching solar altitude is `acot(ratio + tan|φ - δ|)`.
    ///
    /// # Errors
    /// Returns `ComputationError` if the Sun never reaches that altitude.
    pub fn at_shadow(&self, ratio: f64) -> Result<f64> {
        let latitude = self.latitude;
        let declination = self.coordinates.declination();

        let altitude = acot_deg(ratio + tan_deg(abs(latitude - declination)));
        let cos_hour_angle = (sin_deg(altitude) - sin_deg(latitude) * sin_deg(declination))
            / (cos_deg(latitude) * cos_deg(declination));

        if !(-1.0..=1.0).contains(&cos_hour_angle) {
            return Err(Error::computation_error(
                "sun never reaches the altitude for this shadow ratio",
            ));
        }
        Ok(acos_deg(cos_hour_angle))
    }

    /// The solar coordinates these angles are based on.
    #[must_use]
    pub const fn coordinates(&self) -> &SolarCoordinates {
        &self.coordinates
    }

    /// The observer latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// Solar events for one UTC date at one observer position.
///
/// All times are [`DecimalHours`] since 0h UTC of the date and are not
/// wrapped into `[0, 24)`.
///
/// # Example
/// ```
/// use solar_ephemeris::{ObserverPosition, SolarEvents, time::CivilTimestamp};
///
/// let events = SolarEvents::on(
///     &CivilTimestamp::from_date(2025, 1, 1),
///     ObserverPosition::new(45.46416, 9.19199), // Milan
/// );
///
/// assert_eq!(events.sunrise()?.clock_with_seconds().to_string(), "07:03:12");
/// assert_eq!(events.sunset()?.clock_with_seconds().to_string(), "15:50:37");
/// assert_eq!(events.day_length()?.clock_with_seconds().to_string(), "08:47:24");
/// # Ok::<(), solar_ephemeris::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEvents {
    angle: SolarAngle,
    position: ObserverPosition,
}

impl SolarEvents {
    /// Creates solar events from precomputed coordinates.
    #[must_use]
    pub const fn new(coordinates: SolarCoordinates, position: ObserverPosition) -> Self {
        Self {
            angle: SolarAngle::new(coordinates, position.latitude()),
            position,
        }
    }

    /// Creates solar events for the UTC date of `timestamp`.
    #[must_use]
    pub fn on(timestamp: &CivilTimestamp, position: ObserverPosition) -> Self {
        Self::new(SolarCoordinates::on(timestamp), position)
    }

    /// The solar coordinates of the date.
    #[must_use]
    pub const fn coordinates(&self) -> &SolarCoordinates {
        self.angle.coordinates()
    }

    /// The observer position.
    #[must_use]
    pub const fn position(&self) -> &ObserverPosition {
        &self.position
    }

    /// Solar angles at the observer's latitude.
    #[must_use]
    pub const fn angle(&self) -> &SolarAngle {
        &self.angle
    }

    /// Hour angle in degrees for a depression below the horizon.
    ///
    /// # Errors
    /// Returns `SunNeverRises` or `SunNeverSets` for polar conditions.
    pub fn hour_angle_at(&self, depression: f64) -> Result<f64> {
        self.angle.hour_angle_at(depression)
    }

    /// Solar noon: `12 - longitude/15 - EqT`, with `EqT` taken from
    /// [`SolarCoordinates::meridian_offset`] so noon stays on the requested
    /// date around the March equinox.
    #[must_use]
    pub fn noon(&self) -> DecimalHours {
        DecimalHours::from_hours(
            12.0 - degrees_to_hours(self.position.longitude())
                - self.coordinates().meridian_offset(),
        )
    }

    /// Sunrise, when the Sun's centre reaches [`horizon_depression`] for the
    /// observer's altitude. Higher observers see it later.
    ///
    /// # Errors
    /// Returns `SunNeverRises` or `SunNeverSets` for polar conditions.
    pub fn sunrise(&self) -> Result<DecimalHours> {
        let hour_angle = self.hour_angle_at(self.sunrise_depression())?;
        Ok(DecimalHours::from_hours(
            self.noon().hours() - degrees_to_hours(hour_angle),
        ))
    }

    /// Sunset, when the Sun's centre reaches [`horizon_depression`] for the
    /// observer's altitude. Higher observers see it earlier.
    ///
    /// # Errors
    /// Returns `SunNeverRises` or `SunNeverSets` for polar conditions.
    pub fn sunset(&self) -> Result<DecimalHours> {
        let hour_angle = self.hour_angle_at(self.sunrise_depression())?;
        Ok(DecimalHours::from_hours(
            self.noon().hours() + degrees_to_hours(hour_angle),
        ))
    }

    /// Day length, `sunset - sunrise`.
    ///
    /// # Errors
    /// Returns `SunNeverRises` or `SunNeverSets` for polar conditions.
    pub fn day_length(&self) -> Result<DecimalHours> {
        let sunrise = self.sunrise()?;
        let sunset = self.sunset()?;
        Ok(DecimalHours::from_hours(sunset.hours() - sunrise.hours()))
    }

    /// Times at which the Sun's centre crosses the given horizon, as
    /// `(rising, setting)`.
    ///
    /// [`Horizon::SunriseSunset`] includes the altitude correction of
    /// [`horizon_depression`]; twilight and custom horizons are used as given.
    ///
    /// # Errors
    /// Returns `SunNeverRises` or `SunNeverSets` for polar conditions.
    pub fn rise_and_set(&self, horizon: Horizon) -> Result<(DecimalHours, DecimalHours)> {
        let hour_angle = degrees_to_hours(self.hour_angle_at(self.depression_for(horizon))?);
        let noon = self.noon().hours();
        Ok((
            DecimalHours::from_hours(noon - hour_angle),
            DecimalHours::from_hours(noon + hour_angle),
        ))
    }

    /// Sunrise, noon and sunset for a horizon, with polar conditions folded
    /// into [`SunriseResult::AllDay`] and [`SunriseResult::AllNight`].
    ///
    /// # Errors
    /// Returns an error only for failures other than polar day or night.
    ///
    /// # Example
    /// ```
    /// use solar_ephemeris::{Horizon, ObserverPosition, SolarEvents, time::CivilTimestamp};
    ///
    /// let events = SolarEvents::on(
    ///     &CivilTimestamp::from_date(2025, 12, 21),
    ///     ObserverPosition::new(78.22, 15.65), // Longyearbyen
    /// );
    /// let result = events.sunrise_result(Horizon::SunriseSunset)?;
    /// assert!(result.is_polar_night());
    /// assert_eq!(result.day_length().hours(), 0.0);
    /// # Ok::<(), solar_ephemeris::Error>(())
    /// ```
    pub fn sunrise_result(&self, horizon: Horizon) -> Result<SunriseResult<DecimalHours>> {
        let noon = self.noon();
        match self.rise_and_set(horizon) {
            Ok((sunrise, sunset)) => Ok(SunriseResult::RegularDay {
                sunrise,
                noon,
                sunset,
            }),
            Err(Error::SunNeverRises { .. }) => Ok(SunriseResult::AllNight { noon }),
            Err(Error::SunNeverSets { .. }) => Ok(SunriseResult::AllDay { noon }),
            Err(err) => Err(err),
        }
    }

    fn sunrise_depression(&self) -> f64 {
        horizon_depression(self.position.altitude())
    }

    fn depression_for(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::SunriseSunset => self.sunrise_depression(),
            other => other.depression(),
        }
    }
}
