use rand::{rngs::StdRng, Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::{feature::SpatialFeature, geom::Point};

/// Points used to vote for a source feature.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SampleSet {
    /// Rejection samples that landed inside the feature (never empty).
    Accepted(Vec<Point>),
    /// Nothing was accepted; the feature's centroid stands in.
    Centroid(Point),
}

impl SampleSet {
    pub(crate) fn points(&self) -> &[Point] {
        match self {
            SampleSet::Accepted(points) => points,
            SampleSet::Centroid(centroid) => std::slice::from_ref(centroid),
        }
    }

    /// Number of accepted rejection samples (zero for the centroid stand-in).
    pub(crate) fn accepted(&self) -> usize {
        match self {
            SampleSet::Accepted(points) => points.len(),
            SampleSet::Centroid(_) => 0,
        }
    }
}

/// Stable 64-bit seed derived from a feature identifier (first 8 bytes of its SHA-256).
pub(crate) fn seed_for(id: &str) -> u64 {
    let digest = Sha256::digest(id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Generator owned by a single feature's computation, seeded from its identifier.
pub(crate) fn feature_rng(id: &str) -> StdRng {
    StdRng::seed_from_u64(seed_for(id))
}

/// Rejection-sample up to `target` points inside `feature`, drawing at most `max_attempts`
/// times uniformly from its bounding box.
pub(crate) fn sample_points(feature: &SpatialFeature, target: usize, max_attempts: usize) -> SampleSet {
    let bbox = feature.bbox();
    let (width, height) = (bbox.width(), bbox.height());

    // A point-like feature has nothing to sample. A single flat axis still samples:
    // every draw lands on that axis, where boundary-inclusive containment accepts it.
    if width <= 0.0 && height <= 0.0 { return SampleSet::Centroid(feature.centroid()) }

    let mut rng = feature_rng(feature.id());
    let mut points = Vec::with_capacity(target);
    let mut attempts = 0;
    while points.len() < target && attempts < max_attempts {
        let p = Point::new(
            bbox.min_x + rng.random::<f64>() * width,
            bbox.min_y + rng.random::<f64>() * height,
        );
        attempts += 1;
        if feature.contains(p) { points.push(p) }
    }

    if points.is_empty() { SampleSet::Centroid(feature.centroid()) } else { SampleSet::Accepted(points) }
}
