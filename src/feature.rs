use std::sync::Arc;

use crate::geom::{BoundingBox, MultiPolygon, Point};

/// An identified area: one identifier bound to one multipolygon.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialFeature {
    id: Arc<str>,
    geometry: MultiPolygon,
    bbox: BoundingBox,
}

impl SpatialFeature {
    pub fn new(id: impl Into<Arc<str>>, geometry: MultiPolygon) -> Self {
        Self { id: id.into(), bbox: geometry.bbox(), geometry }
    }

    #[inline] pub fn id(&self) -> &str { &self.id }

    #[inline] pub fn geometry(&self) -> &MultiPolygon { &self.geometry }

    #[inline] pub fn bbox(&self) -> BoundingBox { self.bbox }

    #[inline] pub fn centroid(&self) -> Point { self.geometry.centroid() }

    /// Cheap bounding-box rejection before the exact ray-casting test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bbox.contains(p) && self.geometry.contains(p)
    }
}
