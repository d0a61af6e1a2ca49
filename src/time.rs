//! Julian Day and Julian Date conversions.
//!
//! Civil timestamps are mapped to Julian Day Numbers with the exact integer
//! algorithm of Fliegel & Van Flandern (1968), and back again with its inverse.
//! All dates use the proleptic Gregorian calendar with astronomical year
//! numbering (year 0 is 1 BCE).

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{floor, round};
use core::fmt;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JD: f64 = 2_451_545.0;

/// Offset between Julian Date and Modified Julian Date
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// A UTC calendar instant with millisecond precision.
///
/// Fields are stored as given. Ranges are not validated: callers are expected
/// to pass a normalized proleptic Gregorian date, and out-of-range fields
/// simply flow through the integer formulas.
///
/// Field order makes the derived `Ord` chronological for normalized values.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::CivilTimestamp;
/// let landing = CivilTimestamp::new(1969, 7, 20, 20, 18, 0, 0);
/// assert_eq!(landing.julian_day_number(), 2_440_423);
/// assert_eq!(landing.to_string(), "1969-07-20T20:18:00.000Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilTimestamp {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl CivilTimestamp {
    /// Creates a timestamp from UTC calendar and clock fields.
    ///
    /// # Arguments
    /// * `year` - Astronomical year (0 = 1 BCE, -1 = 2 BCE)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59)
    /// * `millisecond` - Millisecond (0-999)
    #[must_use]
    pub const fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Creates a timestamp at 00:00:00.000 UTC of the given date.
    #[must_use]
    pub const fn from_date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Creates a timestamp from a timezone-aware chrono `DateTime`.
    ///
    /// The instant is converted to UTC first. Sub-millisecond precision is
    /// truncated, and a leap second (`nanosecond >= 1e9`) is folded into the
    /// last millisecond of its minute.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&chrono::Utc);
        Self::new(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second(),
            (utc.nanosecond() / 1_000_000).min(999),
        )
    }

    /// Converts to a chrono `DateTime<Utc>`.
    ///
    /// Returns `None` if the fields do not form a valid calendar instant or lie
    /// outside chrono's supported range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
            .map(|naive| naive.and_utc())
    }

    /// Gets the astronomical year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour.
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute.
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second.
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Gets the millisecond.
    #[must_use]
    pub const fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// Returns the same date with the time of day reset to midnight UTC.
    #[must_use]
    pub const fn at_midnight(&self) -> Self {
        Self::from_date(self.year, self.month, self.day)
    }

    /// Fraction of the day elapsed since midnight, `[0, 1)` for normalized fields.
    #[must_use]
    pub fn day_fraction(&self) -> f64 {
        (f64::from(self.hour)
            + f64::from(self.minute) / 60.0
            + f64::from(self.second) / 3600.0
            + f64::from(self.millisecond) / 3_600_000.0)
            / 24.0
    }

    /// Julian Day Number of this date (noon-anchored, time of day ignored).
    #[must_use]
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Continuous Julian Date of this instant.
    #[must_use]
    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_civil(self)
    }
}

impl fmt::Display for CivilTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Computes the Julian Day Number of a proleptic Gregorian date.
///
/// Exact integer arithmetic (Fliegel & Van Flandern), so there is no floating
/// point drift over any range of years. January and February are treated as
/// months 13 and 14 of the previous year.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::julian_day_number;
/// assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
/// assert_eq!(julian_day_number(1582, 10, 15), 2_299_161);
/// ```
#[must_use]
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let a = (14 - month).div_euclid(12);
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;

    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Computes the continuous Julian Date of a civil timestamp.
///
/// `JD = JDN + day_fraction - 0.5`, so midnight UTC falls on `.5`.
#[must_use]
pub fn julian_date(timestamp: &CivilTimestamp) -> f64 {
    timestamp.julian_day_number() as f64 + timestamp.day_fraction() - 0.5
}

/// Julian date representation for astronomical calculations.
///
/// Wraps a continuous day count whose integer part changes at noon UTC.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// The J2000.0 epoch.
    pub const J2000: Self = Self { jd: J2000_JD };

    /// Wraps a raw Julian Date value.
    #[must_use]
    pub const fn new(jd: f64) -> Self {
        Self { jd }
    }

    /// Creates a Julian date from a civil UTC timestamp.
    #[must_use]
    pub fn from_civil(timestamp: &CivilTimestamp) -> Self {
        Self::new(julian_date(timestamp))
    }

    /// Creates a Julian date from year, month, day, hour, minute, second and millisecond in UTC.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::JulianDate;
    /// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0, 0);
    /// assert_eq!(jd, JulianDate::J2000);
    /// ```
    #[must_use]
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self::from_civil(&CivilTimestamp::new(
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        ))
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        Self::from_civil(&CivilTimestamp::from_datetime(datetime))
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the Julian Day, `floor(jd)`.
    #[must_use]
    pub fn julian_day(&self) -> i64 {
        floor(self.jd) as i64
    }

    /// Gets the noon-anchored Julian Day Number, `floor(jd + 0.5)`.
    #[must_use]
    pub fn julian_day_number(&self) -> i64 {
        floor(self.jd + 0.5) as i64
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JD
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    /// Gets the Modified Julian Date, `JD - 2400000.5`.
    #[must_use]
    pub fn modified_julian_date(&self) -> f64 {
        self.jd - MJD_OFFSET
    }

    /// Converts back to a civil UTC timestamp.
    ///
    /// The date comes from the inverse Fliegel & Van Flandern algorithm. The
    /// time of day is rounded to the nearest millisecond, and a rounding that
    /// reaches the next day carries into the date, so every timestamp with
    /// millisecond precision survives the round trip through `from_civil`.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::{CivilTimestamp, JulianDate};
    /// let t = CivilTimestamp::new(2025, 8, 29, 18, 30, 15, 123);
    /// assert_eq!(JulianDate::from_civil(&t).to_civil(), t);
    /// ```
    #[must_use]
    pub fn to_civil(&self) -> CivilTimestamp {
        let shifted = self.jd + 0.5;
        let whole = floor(shifted);
        let mut day_fraction = shifted - whole;
        if day_fraction < 0.0 {
            day_fraction += 1.0;
        }

        let mut z = whole as i64;
        let mut millis = round(day_fraction * MILLISECONDS_PER_DAY as f64) as i64;
        if millis >= MILLISECONDS_PER_DAY {
            z += 1;
            millis -= MILLISECONDS_PER_DAY;
        }

        let (year, month, day) = calendar_date(z);

        let hour = millis / 3_600_000;
        let minute = millis / 60_000 % 60;
        let second = millis / 1000 % 60;
        let millisecond = millis % 1000;

        CivilTimestamp::new(
            year,
            month,
            day,
            hour as u32,
            minute as u32,
            second as u32,
            millisecond as u32,
        )
    }

    /// Returns the Julian date shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self::new(self.jd + days)
    }
}

/// Inverse Fliegel & Van Flandern: Julian Day Number to (year, month, day).
fn calendar_date(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + ((4 * jdn + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;

    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (14 - month).div_euclid(12);

    (year as i32, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_julian_date_creation() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0, 0);

        // J2000.0 epoch should be exactly 2451545.0
        assert!((jd.julian_date() - J2000_JD).abs() < EPSILON);
        assert_eq!(jd.julian_day(), 2_451_545);
        assert_eq!(jd.julian_day_number(), 2_451_545);
    }

    #[test]
    fn test_julian_day_number_known_dates() {
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
        assert_eq!(julian_day_number(1969, 7, 20), 2_440_423);
        assert_eq!(julian_day_number(1858, 11, 17), 2_400_001);
        assert_eq!(julian_day_number(1970, 1, 1), 2_440_588);
        assert_eq!(julian_day_number(0, 1, 1), 1_721_060);
        assert_eq!(julian_day_number(-4713, 11, 24), 0);
    }

    #[test]
    fn test_julian_day_number_ignores_time_of_day() {
        let morning = CivilTimestamp::new(2024, 2, 29, 0, 0, 0, 0);
        let evening = CivilTimestamp::new(2024, 2, 29, 23, 59, 59, 999);
        assert_eq!(morning.julian_day_number(), evening.julian_day_number());
    }

    #[test]
    fn test_julian_day_vs_day_number_around_noon() {
        let before_noon = JulianDate::from_utc(2000, 1, 1, 11, 0, 0, 0);
        assert_eq!(before_noon.julian_day(), 2_451_544);
        assert_eq!(before_noon.julian_day_number(), 2_451_545);

        let after_noon = JulianDate::from_utc(2000, 1, 1, 13, 0, 0, 0);
        assert_eq!(after_noon.julian_day(), 2_451_545);
        assert_eq!(after_noon.julian_day_number(), 2_451_545);
    }

    #[test]
    fn test_julian_centuries() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0, 0);
        assert!(jd.julian_century().abs() < EPSILON);
        assert!(jd.days_since_j2000().abs() < EPSILON);

        let jd = JulianDate::from_utc(2100, 1, 1, 12, 0, 0, 0);
        assert!((jd.julian_century() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_modified_julian_date() {
        let epoch = JulianDate::from_utc(1858, 11, 17, 0, 0, 0, 0);
        assert!(epoch.modified_julian_date().abs() < EPSILON);

        let jd = JulianDate::from_utc(2025, 8, 29, 0, 0, 0, 0);
        assert!((jd.modified_julian_date() - (jd.julian_date() - MJD_OFFSET)).abs() < EPSILON);
    }

    #[test]
    fn test_specific_julian_dates() {
        // Unix epoch: 1970-01-01 00:00:00 UTC
        let unix_epoch = JulianDate::from_utc(1970, 1, 1, 0, 0, 0, 0);
        assert!((unix_epoch.julian_date() - 2_440_587.5).abs() < 1e-6);

        // Y2K: 2000-01-01 00:00:00 UTC
        let y2k = JulianDate::from_utc(2000, 1, 1, 0, 0, 0, 0);
        assert!((y2k.julian_date() - 2_451_544.5).abs() < 1e-6);
    }

    #[test]
    fn test_to_civil_carries_rounded_milliseconds() {
        // 0.4 ms before midnight rounds up into the next day
        let jd = JulianDate::from_utc(2023, 12, 31, 0, 0, 0, 0).add_days(1.0 - 0.4 / 86_400_000.0);
        assert_eq!(jd.to_civil(), CivilTimestamp::from_date(2024, 1, 1));
    }

    #[test]
    fn test_to_civil_gregorian_reform_boundary() {
        let first_gregorian = CivilTimestamp::from_date(1582, 10, 15);
        let jd = JulianDate::from_civil(&first_gregorian);
        assert_eq!(jd.julian_day_number(), 2_299_161);
        assert_eq!(jd.to_civil(), first_gregorian);

        // The day before is the proleptic Gregorian 1582-10-14
        assert_eq!(
            jd.add_days(-1.0).to_civil(),
            CivilTimestamp::from_date(1582, 10, 14)
        );
    }

    #[test]
    fn test_day_fraction() {
        assert_eq!(CivilTimestamp::from_date(2025, 1, 1).day_fraction(), 0.0);
        assert_eq!(
            CivilTimestamp::new(2025, 1, 1, 12, 0, 0, 0).day_fraction(),
            0.5
        );
        assert_eq!(
            CivilTimestamp::new(2025, 1, 1, 18, 0, 0, 0).day_fraction(),
            0.75
        );
    }

    #[test]
    fn test_at_midnight() {
        let t = CivilTimestamp::new(2025, 1, 1, 12, 34, 56, 789);
        assert_eq!(t.at_midnight(), CivilTimestamp::from_date(2025, 1, 1));
    }

    #[test]
    fn test_civil_ordering() {
        let a = CivilTimestamp::new(2024, 12, 31, 23, 59, 59, 999);
        let b = CivilTimestamp::from_date(2025, 1, 1);
        assert!(a < b);
        assert!(a.julian_date() < b.julian_date());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_civil_display() {
        assert_eq!(
            CivilTimestamp::new(2025, 8, 29, 18, 30, 15, 123).to_string(),
            "2025-08-29T18:30:15.123Z"
        );
        assert_eq!(
            CivilTimestamp::from_date(0, 1, 1).to_string(),
            "0000-01-01T00:00:00.000Z"
        );
        assert_eq!(
            CivilTimestamp::from_date(-44, 3, 15).to_string(),
            "-0044-03-15T00:00:00.000Z"
        );
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_conversions() {
        use chrono::{DateTime, FixedOffset, Utc};

        let datetime = "2025-01-01T13:00:00.250+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let civil = CivilTimestamp::from_datetime(&datetime);
        assert_eq!(civil, CivilTimestamp::new(2025, 1, 1, 12, 0, 0, 250));

        let back = civil.to_datetime().unwrap();
        assert_eq!(
            back,
            "2025-01-01T12:00:00.250Z".parse::<DateTime<Utc>>().unwrap()
        );

        assert!(CivilTimestamp::from_date(2025, 2, 30).to_datetime().is_none());

        let jd = JulianDate::from_datetime(&datetime);
        assert!((jd.julian_date() - 2_460_677.000_002_893).abs() < 1e-8);
    }
}
