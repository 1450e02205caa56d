//! Error types for route planning.
//!
//! The optimizer and statistics are total functions; these errors come from
//! the boundary that prepares their input.

use thiserror::Error;
use tourplan_geo::{Coordinate, GeoError};

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors raised while preparing or rendering a plan.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Nothing was selected
    #[error("No places selected")]
    EmptySelection,

    /// Selection exceeds the configured bound
    #[error("Too many places selected: {count} (maximum {max})")]
    TooManyPlaces { count: usize, max: usize },

    /// The same place id appears twice
    #[error("Place '{0}' is selected more than once")]
    DuplicatePlace(String),

    /// Place coordinate is non-finite, out of range or the (0, 0) sentinel
    #[error("Place '{id}' has no usable location ({coordinate})")]
    InvalidCoordinate { id: String, coordinate: Coordinate },

    /// Unknown duration locale
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Geo error
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Numeric error codes, 11xxx range.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteErrorCode {
    EmptySelection = 11001,
    TooManyPlaces = 11002,
    DuplicatePlace = 11003,
    InvalidCoordinate = 11004,
    UnsupportedLocale = 11005,
    Geo = 11006,
    JsonParsing = 11007,
}

impl RouteError {
    /// Returns the error code for this error.
    pub fn code(&self) -> RouteErrorCode {
        match self {
            RouteError::EmptySelection => RouteErrorCode::EmptySelection,
            RouteError::TooManyPlaces { .. } => RouteErrorCode::TooManyPlaces,
            RouteError::DuplicatePlace(_) => RouteErrorCode::DuplicatePlace,
            RouteError::InvalidCoordinate { .. } => RouteErrorCode::InvalidCoordinate,
            RouteError::UnsupportedLocale(_) => RouteErrorCode::UnsupportedLocale,
            RouteError::Geo(_) => RouteErrorCode::Geo,
            RouteError::JsonError(_) => RouteErrorCode::JsonParsing,
        }
    }

    /// True for conditions the UI shows as an empty state rather than a failure.
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, RouteError::EmptySelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RouteError::EmptySelection.code() as u32, 11001);
        assert_eq!(
            RouteError::TooManyPlaces { count: 60, max: 50 }.code(),
            RouteErrorCode::TooManyPlaces
        );
        assert_eq!(
            RouteError::from(GeoError::InvalidWkt("x".into())).code(),
            RouteErrorCode::Geo
        );
    }

    #[test]
    fn test_messages() {
        let err = RouteError::TooManyPlaces { count: 60, max: 50 };
        assert_eq!(err.to_string(), "Too many places selected: 60 (maximum 50)");

        let err = RouteError::InvalidCoordinate {
            id: "wat-pho".into(),
            coordinate: Coordinate::new(0.0, 0.0),
        };
        assert!(err.to_string().contains("wat-pho"));
        assert!(RouteError::EmptySelection.is_empty_selection());
    }
}
