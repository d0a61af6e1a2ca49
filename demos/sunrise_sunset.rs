//! Sunrise/sunset calculation example with different twilight types across diverse global locations.

use chrono::{DateTime, Utc};
use solar_ephemeris::{
    DecimalHours, Horizon, ObserverPosition, SolarCoordinates, SolarEvents, SunriseResult,
    time::CivilTimestamp,
};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
        },
        City {
            name: "Milan, Italy",
            latitude: 45.46416,
            longitude: 9.19199,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
        },
    ];

    // Winter solstice in the north shows the most extreme variations
    let datetime = "2023-12-21T00:00:00Z".parse::<DateTime<Utc>>()?;
    let date = CivilTimestamp::from_datetime(&datetime);
    let coordinates = SolarCoordinates::on_datetime(&datetime);

    println!("Date: {date}");
    println!(
        "Declination {:.3}°, equation of time {:+.2} min",
        coordinates.declination(),
        coordinates.equation_of_time() * 60.0
    );
    println!();

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E",
            city.latitude, city.longitude
        );

        let position = ObserverPosition::try_new(city.latitude, city.longitude)?;
        let events = SolarEvents::new(coordinates, position);
        calculate_and_print_times(&events, &date)?;
        println!();
    }

    Ok(())
}

fn calculate_and_print_times(
    events: &SolarEvents,
    date: &CivilTimestamp,
) -> Result<(), Box<dyn std::error::Error>> {
    let horizons = [
        ("Sunrise/Sunset", Horizon::SunriseSunset),
        ("Civil Twilight", Horizon::CivilTwilight),
        ("Nautical Twilight", Horizon::NauticalTwilight),
        ("Astronomical Twilight", Horizon::AstronomicalTwilight),
    ];

    for (name, horizon) in &horizons {
        let result = events.sunrise_result(*horizon)?;
        print_sunrise_result(name, &result, date);
    }

    Ok(())
}

fn print_sunrise_result(label: &str, result: &SunriseResult<DecimalHours>, date: &CivilTimestamp) {
    let show = |hours: &DecimalHours| match hours.to_datetime(date) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{hours} (out of range)"),
    };

    println!("{label}:");
    match result {
        SunriseResult::RegularDay {
            sunrise,
            noon,
            sunset,
        } => {
            println!("  Begin: {}", show(sunrise));
            println!("  Noon:  {}", show(noon));
            println!("  End:   {}", show(sunset));
            println!("  Length: {}", result.day_length());
        }
        SunriseResult::AllDay { noon } => {
            println!("  All day above horizon");
            println!("  Noon:  {}", show(noon));
        }
        SunriseResult::AllNight { noon } => {
            println!("  All night below horizon");
            println!("  Noon:  {}", show(noon));
        }
    }
}
