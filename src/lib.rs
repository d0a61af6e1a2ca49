//! # Solar Ephemeris Library
//!
//! Julian dates, low-precision solar coordinates, and sunrise/sunset times.
//!
//! The crate is organised in three layers, each built on the one below:
//! - **Julian conversion** ([`time`]): civil UTC timestamps to Julian Day Numbers and
//!   continuous Julian Dates and back, using the exact integer algorithm of
//!   Fliegel & Van Flandern
//! - **Solar coordinates** ([`SolarCoordinates`]): declination, right ascension and
//!   equation of time for a UTC date, from the Astronomical Almanac's low-precision
//!   formulae (±0.01°)
//! - **Solar events** ([`SolarEvents`]): solar noon, sunrise, sunset and day length for
//!   an observer, returned as [`DecimalHours`] with zero-padded clock strings
//!
//! Every value is an immutable `Copy` type computed on demand; there is no shared state.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based constructors and conversions
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-ephemeris = "0.1"
//!
//! # Minimal std (no chrono)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Julian dates
//! ```rust
//! use solar_ephemeris::time::{CivilTimestamp, JulianDate};
//!
//! let landing = CivilTimestamp::new(1969, 7, 20, 20, 18, 0, 0);
//! let jd = JulianDate::from_civil(&landing);
//!
//! assert_eq!(jd.julian_day(), 2_440_423);
//! assert!((jd.julian_date() - 2_440_423.345_83).abs() < 1e-4);
//! assert_eq!(jd.to_civil(), landing);
//! ```
//!
//! ### Sunrise and sunset
//! ```rust
//! use solar_ephemeris::{ObserverPosition, SolarEvents, time::CivilTimestamp};
//!
//! let events = SolarEvents::on(
//!     &CivilTimestamp::from_date(2025, 1, 1),
//!     ObserverPosition::new(45.46416, 9.19199), // Milan
//! );
//!
//! println!("Solar noon: {} UTC", events.noon());
//! println!("Sunrise:    {} UTC", events.sunrise()?);
//! println!("Sunset:     {} UTC", events.sunset()?);
//! println!("Day length: {}", events.day_length()?);
//! # Ok::<(), solar_ephemeris::Error>(())
//! ```
//!
//! ### Polar day and night
//! ```rust
//! use solar_ephemeris::{Error, ObserverPosition, SolarEvents, time::CivilTimestamp};
//!
//! let events = SolarEvents::on(
//!     &CivilTimestamp::from_date(2025, 6, 21),
//!     ObserverPosition::new(78.22, 15.65), // Longyearbyen
//! );
//!
//! match events.sunset() {
//!     Err(Error::SunNeverSets { .. }) => println!("Midnight sun"),
//!     Err(Error::SunNeverRises { .. }) => println!("Polar night"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, north positive
//! - **Longitude**: degrees, east positive
//! - **Depression**: degrees of the Sun's centre below the horizon, positive downward
//! - **Times**: decimal hours since 0h UTC of the requested date, not wrapped into `[0, 24)`

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of rounded angles in tests
)]

// Public API exports
pub use crate::coordinates::SolarCoordinates;
pub use crate::error::{Error, Result};
pub use crate::events::{SolarAngle, SolarEvents};
pub use crate::types::{Clock, DecimalHours, Horizon, ObserverPosition, SunriseResult};

// Calculation layers
pub mod coordinates;
pub mod events;
pub mod time;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;
