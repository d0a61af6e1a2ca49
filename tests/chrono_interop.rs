//! Conversions between chrono datetimes and the civil/Julian types.
#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_ephemeris::{
    ObserverPosition, SolarCoordinates, SolarEvents,
    time::{CivilTimestamp, JulianDate},
};

#[test]
fn test_julian_date_from_datetime() {
    let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(JulianDate::from_datetime(&j2000), JulianDate::J2000);

    // Same instant expressed in UTC-5
    let new_york = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2000, 1, 1, 7, 0, 0)
        .unwrap();
    assert_eq!(JulianDate::from_datetime(&new_york), JulianDate::J2000);
}

#[test]
fn test_civil_timestamp_round_trip_through_chrono() {
    let datetime = "2025-08-29T18:30:15.123Z".parse::<DateTime<Utc>>().unwrap();
    let civil = CivilTimestamp::from_datetime(&datetime);

    assert_eq!(civil, CivilTimestamp::new(2025, 8, 29, 18, 30, 15, 123));
    assert_eq!(civil.to_string(), "2025-08-29T18:30:15.123Z");
    assert_eq!(civil.to_datetime(), Some(datetime));
}

#[test]
fn test_sub_millisecond_precision_is_truncated() {
    let datetime = "2025-08-29T18:30:15.123987Z".parse::<DateTime<Utc>>().unwrap();
    assert_eq!(CivilTimestamp::from_datetime(&datetime).millisecond(), 123);
}

#[test]
fn test_invalid_civil_fields_have_no_datetime() {
    assert_eq!(CivilTimestamp::from_date(2025, 2, 30).to_datetime(), None);
    assert_eq!(CivilTimestamp::new(2025, 1, 1, 24, 0, 0, 0).to_datetime(), None);
}

#[test]
fn test_julian_to_civil_matches_chrono() {
    let datetimes = [
        "1969-07-20T20:18:00Z",
        "1999-12-31T23:59:59.999Z",
        "2024-02-29T06:07:08.009Z",
    ];

    for text in datetimes {
        let datetime = text.parse::<DateTime<Utc>>().unwrap();
        let civil = JulianDate::from_datetime(&datetime).to_civil();
        assert_eq!(civil.to_datetime(), Some(datetime), "{text}");
    }
}

#[test]
fn test_solar_events_as_local_times() {
    let milan = FixedOffset::east_opt(3600).unwrap();
    let local = milan.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let date = CivilTimestamp::from_datetime(&local);

    let events = SolarEvents::new(
        SolarCoordinates::on_datetime(&local),
        ObserverPosition::new(45.46416, 9.19199),
    );

    let sunrise = events
        .sunrise()
        .unwrap()
        .to_datetime(&date)
        .unwrap()
        .with_timezone(&milan);
    let sunset = events
        .sunset()
        .unwrap()
        .to_datetime(&date)
        .unwrap()
        .with_timezone(&milan);

    assert_eq!(sunrise.format("%H:%M:%S").to_string(), "08:03:12");
    assert_eq!(sunset.format("%H:%M:%S").to_string(), "16:50:37");
}
