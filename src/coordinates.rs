//! Low-precision solar coordinates.
//!
//! Follows the low-precision formulae for the Sun given in the Astronomical
//! Almanac (accuracy about 0.01° for declination between 1950 and 2050).
//! Every quantity is evaluated for 0h UTC of the requested date.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin_deg, atan2_deg, ceil, cos_deg, degrees_to_hours, normalize_degrees_0_to_360, sin_deg,
};
use crate::time::{CivilTimestamp, J2000_JD, JulianDate};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Bias added before rounding the day count up to a whole day.
const DAY_COUNT_BIAS: f64 = 0.0008;

/// Position of the Sun for one UTC date.
///
/// Only the day count `D` is stored; every angle is derived from it on
/// demand, so repeated calls return bit-identical values.
///
/// # Example
/// ```
/// # use solar_ephemeris::SolarCoordinates;
/// let sun = SolarCoordinates::on_date(2025, 1, 1);
/// assert!((sun.declination() - -22.96).abs() < 0.1);
/// assert!((sun.equation_of_time() * 60.0 - -3.67).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    date: CivilTimestamp,
    days: f64,
}

impl SolarCoordinates {
    /// Solar coordinates for the date of `timestamp`; the time of day is discarded.
    #[must_use]
    pub fn on(timestamp: &CivilTimestamp) -> Self {
        let date = timestamp.at_midnight();
        let days = day_count(JulianDate::from_civil(&date));
        log::trace!("solar coordinates for {date}: D = {days}");
        Self { date, days }
    }

    /// Solar coordinates for a calendar date.
    #[must_use]
    pub fn on_date(year: i32, month: u32, day: u32) -> Self {
        Self::on(&CivilTimestamp::from_date(year, month, day))
    }

    /// Solar coordinates for the UTC date of a timezone-aware datetime.
    ///
    /// The datetime is converted to UTC before truncating, so a local
    /// timestamp shortly after local midnight east of Greenwich may map to the
    /// previous UTC date.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn on_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::on(&CivilTimestamp::from_datetime(datetime))
    }

    /// The UTC date (at midnight) these coordinates belong to.
    #[must_use]
    pub const fn date(&self) -> CivilTimestamp {
        self.date
    }

    /// Whole days since J2000.0, `D`.
    #[must_use]
    pub const fn days_since_j2000(&self) -> f64 {
        self.days
    }

    /// Obliquity of the ecliptic `ε` in degrees.
    #[must_use]
    pub fn obliquity(&self) -> f64 {
        23.4397 - 0.00000036 * self.days
    }

    /// Mean longitude of the Sun `L` in degrees, [0, 360).
    #[must_use]
    pub fn mean_longitude(&self) -> f64 {
        normalize_degrees_0_to_360(280.459 + 0.98564736 * self.days)
    }

    /// Mean anomaly of the Sun `g` in degrees, [0, 360).
    #[must_use]
    pub fn mean_anomaly(&self) -> f64 {
        normalize_degrees_0_to_360(357.529 + 0.98560028 * self.days)
    }

    /// Equation of center in degrees.
    ///
    /// Correction from mean to true anomaly for Earth's elliptical orbit.
    #[must_use]
    pub fn equation_of_center(&self) -> f64 {
        let g = self.mean_anomaly();
        1.914 * sin_deg(g) + 0.0200 * sin_deg(2.0 * g) + 0.0003 * sin_deg(3.0 * g)
    }

    /// Ecliptic longitude of the Sun `λ` in degrees, [0, 360).
    #[must_use]
    pub fn ecliptic_longitude(&self) -> f64 {
        normalize_degrees_0_to_360(self.mean_longitude() + self.equation_of_center())
    }

    /// Right ascension of the Sun in hours, [0, 24).
    #[must_use]
    pub fn right_ascension(&self) -> f64 {
        let epsilon = self.obliquity();
        let lambda = self.ecliptic_longitude();
        let ra = degrees_to_hours(atan2_deg(
            cos_deg(epsilon) * sin_deg(lambda),
            cos_deg(lambda),
        ));
        (ra + 24.0) % 24.0
    }

    /// Declination of the Sun `δ` in degrees.
    #[must_use]
    pub fn declination(&self) -> f64 {
        asin_deg(sin_deg(self.obliquity()) * sin_deg(self.ecliptic_longitude()))
    }

    /// Equation of time in hours (apparent minus mean solar time), `L/15 - RA`.
    ///
    /// Negative values mean the Sun crosses the meridian later than 12:00
    /// local mean time. The value is not wrapped: for a few days before the
    /// March equinox `RA` has already restarted at 0h while `L` has not, and
    /// the result is close to +24 h. See [`Self::meridian_offset`].
    #[must_use]
    pub fn equation_of_time(&self) -> f64 {
        degrees_to_hours(self.mean_longitude()) - self.right_ascension()
    }

    /// Equation of time wrapped into `[-12, 12]` hours.
    ///
    /// Equal to [`Self::equation_of_time`] except where `L/15` and `RA` sit on
    /// opposite sides of the 0h/24h seam, where it differs by a whole day.
    /// Solar noon is computed from this value.
    #[must_use]
    pub fn meridian_offset(&self) -> f64 {
        let eqt = self.equation_of_time();
        if eqt > 12.0 {
            eqt - 24.0
        } else if eqt < -12.0 {
            eqt + 24.0
        } else {
            eqt
        }
    }
}

/// `D = ceil(JD - J2000 + 0.0008)`.
///
/// For a midnight Julian Date this is the number of the J2000 day that starts
/// at the following noon.
fn day_count(jd: JulianDate) -> f64 {
    ceil(jd.julian_date() - J2000_JD + DAY_COUNT_BIAS)
}
