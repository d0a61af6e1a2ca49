//! Example converting between civil UTC timestamps and Julian dates.

use solar_ephemeris::time::{self, CivilTimestamp, JulianDate};

fn main() {
    let moments = [
        ("Julian Day 0", CivilTimestamp::new(-4713, 11, 24, 12, 0, 0, 0)),
        ("Gregorian reform", CivilTimestamp::from_date(1582, 10, 15)),
        ("MJD epoch", CivilTimestamp::from_date(1858, 11, 17)),
        ("Apollo 11 landing", CivilTimestamp::new(1969, 7, 20, 20, 18, 0, 0)),
        ("J2000.0", CivilTimestamp::new(2000, 1, 1, 12, 0, 0, 0)),
    ];

    println!(
        "{:<18} {:>26} {:>10} {:>18} {:>14} {:>12}",
        "Event", "UTC", "JDN", "JD", "MJD", "Centuries"
    );
    for (name, timestamp) in moments {
        let jd = JulianDate::from_civil(&timestamp);
        println!(
            "{:<18} {:>26} {:>10} {:>18.6} {:>14.6} {:>12.8}",
            name,
            timestamp.to_string(),
            jd.julian_day_number(),
            jd.julian_date(),
            jd.modified_julian_date(),
            jd.julian_century()
        );
    }

    println!();
    let jdn = time::julian_day_number(2025, 1, 1);
    println!("JDN of 2025-01-01: {jdn}");
    println!(
        "JD 2460677.25 is {}",
        JulianDate::new(2_460_677.25).to_civil()
    );
}
