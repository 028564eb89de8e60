mod bbox;
mod polygon;
mod record;
mod ring;

pub use bbox::BoundingBox;
pub use polygon::{MultiPolygon, Polygon};
pub use record::GeometryRecord;
pub use ring::{close_ring, point_in_ring, point_on_segment, ring_centroid_and_area, Point, Ring};
