//! Boundary IO: GeoJSON feature loading and crosswalk CSV output.
//!
//! # Format Modules
//!
//! - `geojson` - FeatureCollection input, one `SpatialFeature` per feature
//! - `csv` - two-column crosswalk output

pub mod csv;
pub mod geojson;
