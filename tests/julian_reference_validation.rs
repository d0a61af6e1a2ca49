//! Julian Day Number and Julian Date conversions against published values.

use proptest::prelude::*;
use solar_ephemeris::time::{self, CivilTimestamp, JulianDate, J2000_JD};

#[test]
fn test_julian_day_number_fixed_points() {
    let cases = [
        ((-4713, 11, 24), 0),
        ((1582, 10, 15), 2_299_161),
        ((1858, 11, 17), 2_400_001),
        ((1970, 1, 1), 2_440_588),
        ((2000, 1, 1), 2_451_545),
        ((2023, 12, 31), 2_460_310),
        ((2024, 2, 29), 2_460_370),
    ];

    for ((year, month, day), expected) in cases {
        assert_eq!(
            time::julian_day_number(year, month, day),
            expected,
            "JDN of {year:04}-{month:02}-{day:02}"
        );
    }
}

#[test]
fn test_julian_date_of_moon_landing() {
    // Apollo 11 lunar module touchdown, 1969-07-20 20:18 UTC
    let jd = JulianDate::from_utc(1969, 7, 20, 20, 18, 0, 0);
    assert!((jd.julian_date() - 2_440_423.345_83).abs() < 1e-4);
    assert_eq!(jd.julian_day(), 2_440_423);
}

#[test]
fn test_julian_date_anchored_at_noon() {
    let midnight = JulianDate::from_utc(2000, 1, 1, 0, 0, 0, 0);
    let noon = JulianDate::from_utc(2000, 1, 1, 12, 0, 0, 0);

    assert_eq!(midnight.julian_date(), J2000_JD - 0.5);
    assert_eq!(noon, JulianDate::J2000);
    assert_eq!(noon.julian_date() - midnight.julian_date(), 0.5);
}

#[test]
fn test_derived_day_counts() {
    let jd = JulianDate::from_utc(2025, 1, 1, 0, 0, 0, 0);
    assert_eq!(jd.days_since_j2000(), 9131.5);
    assert!((jd.julian_century() - 9131.5 / 36_525.0).abs() < 1e-12);
    assert_eq!(jd.modified_julian_date(), 60_676.0);
}

#[test]
fn test_round_trip_special_dates() {
    let timestamps = [
        CivilTimestamp::from_date(1582, 10, 15),
        CivilTimestamp::new(1582, 10, 14, 23, 59, 59, 999),
        CivilTimestamp::from_date(0, 1, 1),
        CivilTimestamp::new(-44, 3, 15, 11, 0, 0, 0),
        CivilTimestamp::new(2024, 2, 29, 12, 0, 0, 0),
        CivilTimestamp::new(2025, 8, 29, 18, 30, 15, 123),
        CivilTimestamp::new(9999, 12, 31, 23, 59, 59, 999),
    ];

    for timestamp in timestamps {
        let jd = JulianDate::from_civil(&timestamp);
        assert_eq!(jd.to_civil(), timestamp, "round trip of {timestamp}");
    }
}

#[test]
fn test_to_civil_from_whole_julian_days() {
    // A whole JD is noon of its civil day
    let noon = JulianDate::new(2_460_310.0).to_civil();
    assert_eq!(noon, CivilTimestamp::new(2023, 12, 31, 12, 0, 0, 0));

    let origin = JulianDate::new(0.0).to_civil();
    assert_eq!(origin, CivilTimestamp::new(-4713, 11, 24, 12, 0, 0, 0));
}

#[test]
fn test_consecutive_days_increment_day_number() {
    let mut previous = time::julian_day_number(1999, 12, 31);
    for month in 1..=12 {
        let days_in_month = match month {
            2 => 29,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        for day in 1..=days_in_month {
            let current = time::julian_day_number(2000, month, day);
            assert_eq!(current, previous + 1, "2000-{month:02}-{day:02}");
            previous = current;
        }
    }
}

fn civil_timestamp() -> impl Strategy<Value = CivilTimestamp> {
    (
        -4000i32..=9999,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
    )
        .prop_map(|(year, month, day, hour, minute, second, millisecond)| {
            CivilTimestamp::new(year, month, day, hour, minute, second, millisecond)
        })
}

proptest! {
    #[test]
    fn prop_civil_round_trip(timestamp in civil_timestamp()) {
        let jd = JulianDate::from_civil(&timestamp);
        prop_assert_eq!(jd.to_civil(), timestamp);
    }

    #[test]
    fn prop_day_number_round_trip(jdn in 0i64..5_000_000) {
        // Midnight of day `jdn` starts half a day before its noon
        let civil = JulianDate::new(jdn as f64 - 0.5).to_civil();
        prop_assert_eq!(civil.julian_day_number(), jdn);
        prop_assert_eq!((civil.hour(), civil.minute(), civil.second()), (0, 0, 0));
    }

    #[test]
    fn prop_julian_date_is_monotonic(timestamp in civil_timestamp()) {
        prop_assume!(timestamp.millisecond() < 999);
        let later = CivilTimestamp::new(
            timestamp.year(),
            timestamp.month(),
            timestamp.day(),
            timestamp.hour(),
            timestamp.minute(),
            timestamp.second(),
            timestamp.millisecond() + 1,
        );
        prop_assert!(
            JulianDate::from_civil(&later).julian_date()
                > JulianDate::from_civil(&timestamp).julian_date()
        );
    }
}
