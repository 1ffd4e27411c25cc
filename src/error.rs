//! Error types for the solar events library.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar event calculations.
///
/// An event that simply does not happen on a given day (polar day or night) is
/// not an error; it is reported as `None` or as a polar [`SunriseResult`](crate::SunriseResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid elevation angle for a custom horizon.
    #[error("invalid elevation angle {value}° (must be between -90° and +90°)")]
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid or unrepresentable date/time.
    #[error("invalid date/time: {message}")]
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

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

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Returns `true` for errors caused by an out-of-range coordinate.
    #[must_use]
    pub const fn is_invalid_coordinate(&self) -> bool {
        matches!(
            self,
            Self::InvalidLatitude { .. } | Self::InvalidLongitude { .. }
        )
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates an elevation angle is within -90 to +90 degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` if the angle is outside that range or not finite.
pub fn check_elevation_angle(elevation: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(51.44968).is_ok());

        assert!(check_latitude(90.000_001).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(200.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(6.97337).is_ok());

        assert!(check_longitude(180.5).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_elevation_angle_validation() {
        assert!(check_elevation_angle(-0.833).is_ok());
        assert!(check_elevation_angle(90.0).is_ok());
        assert_eq!(
            check_elevation_angle(200.0),
            Err(Error::invalid_elevation_angle(200.0))
        );
        assert!(check_elevation_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_latitude_is_checked_first() {
        assert_eq!(
            check_coordinates(200.0, 500.0),
            Err(Error::invalid_latitude(200.0))
        );
        assert_eq!(
            check_coordinates(10.0, 500.0),
            Err(Error::invalid_longitude(500.0))
        );
        assert!(check_coordinates(-33.9, 151.2).is_ok());
    }

    #[test]
    fn test_is_invalid_coordinate() {
        assert!(Error::invalid_latitude(95.0).is_invalid_coordinate());
        assert!(Error::invalid_longitude(195.0).is_invalid_coordinate());
        assert!(!Error::invalid_elevation_angle(-95.0).is_invalid_coordinate());
        assert!(!Error::invalid_datetime("out of range").is_invalid_coordinate());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(200.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 200° (must be between -90° and +90°)"
        );

        let err = Error::invalid_longitude(185.0);
        assert_eq!(
            err.to_string(),
            "invalid longitude 185° (must be between -180° and +180°)"
        );

        let err = Error::invalid_datetime("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date/time: month must be between 1 and 12"
        );
    }
}
