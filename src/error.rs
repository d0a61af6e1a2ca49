//! Error types for the solar ephemeris library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during ephemeris calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be a finite number of degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid elevation angle for a custom horizon.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// The Sun stays below the requested horizon all day (polar night).
    SunNeverRises {
        /// Cosine of the hour angle that fell above +1.
        cos_hour_angle: f64,
    },
    /// The Sun stays above the requested horizon all day (polar day).
    SunNeverSets {
        /// Cosine of the hour angle that fell below -1.
        cos_hour_angle: f64,
    },
    /// Numerical computation error (e.g., an angle that is never reached).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(f, "invalid longitude {value}° (must be finite)")
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::SunNeverRises { .. } => {
                write!(f, "sun never rises at this location on this date")
            }
            Self::SunNeverSets { .. } => {
                write!(f, "sun never sets at this location on this date")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates a polar night error.
    #[must_use]
    pub const fn sun_never_rises(cos_hour_angle: f64) -> Self {
        Self::SunNeverRises { cos_hour_angle }
    }

    /// Creates a polar day error.
    #[must_use]
    pub const fn sun_never_sets(cos_hour_angle: f64) -> Self {
        Self::SunNeverSets { cos_hour_angle }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }

    /// Checks if this error reports a polar day or polar night.
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        matches!(self, Self::SunNeverRises { .. } | Self::SunNeverSets { .. })
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is a finite number of degrees.
///
/// Values outside ±180° are accepted; they shift solar noon by whole
/// multiples of 24 hours and wrapping them is left to the caller.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is NaN or infinite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for unusable coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an elevation angle is within -90 to +90 degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` for out-of-range or NaN values.
pub fn check_elevation_angle(elevation: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(())
}
