/// Tolerance for collinearity and boundary hits in containment tests.
pub(crate) const BOUNDARY_EPS: f64 = 1e-12;

/// Signed areas with magnitude below this are treated as zero.
pub(crate) const AREA_EPS: f64 = 1e-12;

/// Smallest number of points in a closed, non-degenerate ring (a triangle plus its closing point).
pub(crate) const MIN_RING_LEN: usize = 4;

/// A planar coordinate pair, read as (longitude, latitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_sq(&self, other: Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

/// A closed ring: the last point always equals the first (or the ring is empty).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Build a closed ring from raw coordinates, appending the first point if the last differs.
    pub fn close(coords: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self { points: close_ring(coords.into_iter().map(Into::into).collect()) }
    }

    #[inline] pub fn points(&self) -> &[Point] { &self.points }

    #[inline] pub fn len(&self) -> usize { self.points.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// A ring with fewer than four points bounds no area and contains nothing.
    #[inline] pub fn is_degenerate(&self) -> bool { self.points.len() < MIN_RING_LEN }

    #[inline] pub fn first(&self) -> Option<Point> { self.points.first().copied() }

    /// Boundary-inclusive containment test.
    #[inline] pub fn contains(&self, p: Point) -> bool { point_in_ring(p, &self.points) }

    /// (centroid, signed area) by the shoelace formula.
    #[inline] pub fn centroid_and_area(&self) -> (Point, f64) { ring_centroid_and_area(&self.points) }
}

/// Ensure first and last point are the same. Empty input stays empty.
pub fn close_ring(mut points: Vec<Point>) -> Vec<Point> {
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }
    points
}

/// True if `p` lies on the segment `a -> b`, within `eps`.
pub fn point_on_segment(p: Point, a: Point, b: Point, eps: f64) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross.abs() > eps { return false }
    let dot = (p.x - a.x) * (p.x - b.x) + (p.y - a.y) * (p.y - b.y);
    dot <= eps
}

/// Ray-casting parity test against a closed ring. Points on an edge count as inside.
pub fn point_in_ring(p: Point, ring: &[Point]) -> bool {
    if ring.len() < MIN_RING_LEN { return false }

    let mut inside = false;
    for edge in ring.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if point_on_segment(p, a, b, BOUNDARY_EPS) { return true }

        // Horizontal edges never cross a horizontal ray.
        if (a.y > p.y) != (b.y > p.y) && a.y != b.y {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if (x_cross - p.x).abs() < BOUNDARY_EPS { return true }
            if x_cross > p.x { inside = !inside }
        }
    }
    inside
}

/// Centroid and signed area of a closed ring (positive for counter-clockwise winding).
/// Degenerate rings yield their first point (or the origin) and zero area.
pub fn ring_centroid_and_area(ring: &[Point]) -> (Point, f64) {
    let fallback = ring.first().copied().unwrap_or_default();
    if ring.len() < MIN_RING_LEN { return (fallback, 0.0) }

    let (mut twice_area, mut cx, mut cy) = (0.0, 0.0, 0.0);
    for edge in ring.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        let cross = a.x * b.y - b.x * a.y;
        twice_area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }

    let area = twice_area / 2.0;
    if area.abs() < AREA_EPS { return (fallback, 0.0) }
    (Point::new(cx / (3.0 * twice_area), cy / (3.0 * twice_area)), area)
}
