#![doc = "Dominant-geography crosswalks between polygon collections"]
mod crosswalk;
mod error;
mod feature;
mod geom;
mod io;

#[doc(inline)]
pub use crosswalk::{
    assign, assign_detailed, assign_one, assign_with, candidates, resolution_counts,
    Assignment, CrosswalkConfig, Resolution, DEFAULT_ATTEMPT_FACTOR, DEFAULT_SAMPLES,
};

#[doc(inline)]
pub use error::GeometryError;

#[doc(inline)]
pub use feature::SpatialFeature;

#[doc(inline)]
pub use geom::{
    close_ring, point_in_ring, point_on_segment, ring_centroid_and_area,
    BoundingBox, GeometryRecord, MultiPolygon, Point, Polygon, Ring,
};

#[doc(inline)]
pub use io::{
    csv::{write_crosswalk, write_crosswalk_string},
    geojson::{parse_features, read_features},
};
