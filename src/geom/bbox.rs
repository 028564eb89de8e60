use super::Point;

/// An axis-aligned bounding box in lon/lat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    #[inline]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        Some(points[1..].iter().fold(
            Self::new(first.x, first.y, first.x, first.y),
            |bb, p| Self::new(bb.min_x.min(p.x), bb.min_y.min(p.y), bb.max_x.max(p.x), bb.max_y.max(p.y)),
        ))
    }

    /// Smallest box containing both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    #[inline] pub fn width(&self) -> f64 { self.max_x - self.min_x }

    #[inline] pub fn height(&self) -> f64 { self.max_y - self.min_y }

    /// Inclusive point test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// True unless one box lies strictly left, right, above or below the other.
    /// Boxes that only touch along an edge or corner overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y)
    }
}
