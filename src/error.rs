use thiserror::Error;

/// Failures while building geometry from raw input records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Only `Polygon` and `MultiPolygon` records are supported.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedType(String),

    /// A multipolygon needs at least one member polygon.
    #[error("MultiPolygon has no member polygons")]
    Empty,

    /// Coordinates do not have the nesting depth the geometry type requires.
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}
