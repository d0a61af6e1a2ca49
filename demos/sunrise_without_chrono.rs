//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! Everything here works from plain calendar fields and decimal hours.

use solar_ephemeris::{
    Horizon, ObserverPosition, SolarEvents, SunriseResult, time::CivilTimestamp,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco on June 21, 2023, 69 m above sea level
    let date = CivilTimestamp::from_date(2023, 6, 21);
    let position = ObserverPosition::try_new(37.7749, -122.4194)?.with_altitude(69.0);
    let events = SolarEvents::on(&date, position);

    println!("San Francisco, {} (UTC):", date);
    println!("  Sunrise:    {} ({:.4} h)", events.sunrise()?, events.sunrise()?.hours());
    println!("  Solar noon: {} ({:.4} h)", events.noon(), events.noon().hours());
    println!("  Sunset:     {} ({:.4} h)", events.sunset()?, events.sunset()?.hours());
    println!("  Day length: {}", events.day_length()?);
    println!();

    // Sunset in UTC falls on the next day
    let (day_offset, hours) = events.sunset()?.day_and_hours();
    println!("Sunset breakdown:");
    println!("  Day offset:   {day_offset}");
    println!("  Hours in day: {hours:.2}");

    // Custom horizon, e.g. the sun's centre 1° below the horizon
    println!("\nWith custom elevation angle (-1.0°):");
    match events.sunrise_result(Horizon::custom(-1.0)?)? {
        SunriseResult::RegularDay {
            sunrise,
            noon,
            sunset,
        } => {
            println!("  Sunrise:    {}", sunrise.clock());
            println!("  Solar noon: {}", noon.clock());
            println!("  Sunset:     {}", sunset.clock());
        }
        SunriseResult::AllDay { noon } => println!("  Polar day, noon at {noon}"),
        SunriseResult::AllNight { noon } => println!("  Polar night, noon at {noon}"),
    }

    Ok(())
}
