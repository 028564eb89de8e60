use crate::error::GeometryError;

use super::{ring::AREA_EPS, BoundingBox, Point, Ring};

/// A polygon with one exterior ring and zero or more holes.
/// Bounding box, signed area and centroid are computed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
    bbox: BoundingBox,
    area: f64,
    centroid: Point,
}

impl Polygon {
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        let bbox = BoundingBox::from_points(exterior.points())
            .unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0));

        // Holes are summed with their own winding sign; well-formed input winds them
        // opposite to the exterior, so they subtract.
        let (ext_centroid, ext_area) = exterior.centroid_and_area();
        let (mut cx, mut cy, mut area) = (ext_centroid.x * ext_area, ext_centroid.y * ext_area, ext_area);
        for hole in &holes {
            let (c, a) = hole.centroid_and_area();
            cx += c.x * a;
            cy += c.y * a;
            area += a;
        }

        let centroid = if area.abs() < AREA_EPS {
            exterior.first().unwrap_or_default()
        } else {
            Point::new(cx / area, cy / area)
        };

        Self { exterior, holes, bbox, area, centroid }
    }

    #[inline] pub fn exterior(&self) -> &Ring { &self.exterior }

    #[inline] pub fn holes(&self) -> &[Ring] { &self.holes }

    #[inline] pub fn bbox(&self) -> BoundingBox { self.bbox }

    /// Signed area in square degrees.
    #[inline] pub fn area(&self) -> f64 { self.area }

    #[inline] pub fn centroid(&self) -> Point { self.centroid }

    /// Inside the exterior ring and outside every hole.
    pub fn contains(&self, p: Point) -> bool {
        self.exterior.contains(p) && !self.holes.iter().any(|hole| hole.contains(p))
    }
}

/// A non-empty union of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    bbox: BoundingBox,
    centroid: Point,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Result<Self, GeometryError> {
        let first = polygons.first().ok_or(GeometryError::Empty)?;

        let bbox = polygons[1..].iter()
            .fold(first.bbox(), |bb, polygon| bb.union(&polygon.bbox()));

        let (mut cx, mut cy, mut total) = (0.0, 0.0, 0.0);
        for polygon in polygons.iter().filter(|polygon| polygon.area().abs() >= AREA_EPS) {
            let (c, a) = (polygon.centroid(), polygon.area());
            cx += c.x * a;
            cy += c.y * a;
            total += a;
        }
        let centroid = if total.abs() < AREA_EPS {
            first.centroid()
        } else {
            Point::new(cx / total, cy / total)
        };

        Ok(Self { polygons, bbox, centroid })
    }

    #[inline] pub fn polygons(&self) -> &[Polygon] { &self.polygons }

    #[inline] pub fn bbox(&self) -> BoundingBox { self.bbox }

    /// Area-weighted mean of member centroids; negligible members are skipped.
    #[inline] pub fn centroid(&self) -> Point { self.centroid }

    /// Sum of member signed areas.
    pub fn area(&self) -> f64 { self.polygons.iter().map(Polygon::area).sum() }

    /// True if any member contains `p`; overlapping members are not deduplicated.
    pub fn contains(&self, p: Point) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(p))
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        Self {
            bbox: polygon.bbox(),
            centroid: polygon.centroid(),
            polygons: vec![polygon],
        }
    }
}
