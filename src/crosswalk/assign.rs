use ahash::AHashMap;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{feature::SpatialFeature, geom::Point};

use super::{
    candidates::candidates,
    config::CrosswalkConfig,
    sample::{sample_points, SampleSet},
};

/// How a source feature's target was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Latitude-weighted votes from accepted rejection samples.
    Sampled,
    /// No sample was accepted; the source centroid voted alone.
    CentroidSample,
    /// No vote landed; the first candidate containing the source centroid.
    CentroidContained,
    /// No candidate contains the centroid; the candidate with the nearest centroid.
    NearestCentroid,
    /// No candidate target overlaps the source bounding box.
    Unmatched,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::Sampled,
        Resolution::CentroidSample,
        Resolution::CentroidContained,
        Resolution::NearestCentroid,
        Resolution::Unmatched,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Sampled => "sampled",
            Resolution::CentroidSample => "centroid-sample",
            Resolution::CentroidContained => "centroid-contained",
            Resolution::NearestCentroid => "nearest-centroid",
            Resolution::Unmatched => "unmatched",
        }
    }
}

/// Result for a single source feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub source: String,
    pub target: Option<String>,
    pub resolution: Resolution,
    /// Accepted rejection samples (0 when the centroid stood in).
    pub samples: usize,
    /// Targets that survived bounding-box pruning.
    pub candidates: usize,
}

/// Map every source to the target holding the largest latitude-weighted share of its area,
/// using default settings. Output order matches `sources`.
pub fn assign(sources: &[SpatialFeature], targets: &[SpatialFeature]) -> Vec<(String, Option<String>)> {
    assign_with(sources, targets, &CrosswalkConfig::default())
}

/// As [`assign`], with explicit settings.
pub fn assign_with(
    sources: &[SpatialFeature],
    targets: &[SpatialFeature],
    config: &CrosswalkConfig,
) -> Vec<(String, Option<String>)> {
    assign_detailed(sources, targets, config).into_iter()
        .map(|a| (a.source, a.target))
        .collect()
}

/// Per-source assignments with the resolution path recorded.
pub fn assign_detailed(
    sources: &[SpatialFeature],
    targets: &[SpatialFeature],
    config: &CrosswalkConfig,
) -> Vec<Assignment> {
    info!(
        sources = sources.len(),
        targets = targets.len(),
        samples = config.samples,
        parallel = config.parallel,
        "assigning dominant targets"
    );

    // Each source seeds its own generator, so the parallel map is order-independent.
    if config.parallel {
        sources.par_iter().map(|source| assign_one(source, targets, config)).collect()
    } else {
        sources.iter().map(|source| assign_one(source, targets, config)).collect()
    }
}

/// Pick the dominant target for one source.
pub fn assign_one(source: &SpatialFeature, targets: &[SpatialFeature], config: &CrosswalkConfig) -> Assignment {
    let candidates = candidates(source, targets);
    let samples = sample_points(source, config.samples, config.max_attempts());

    let votes = tally(samples.points(), &candidates);
    let (target, resolution) = match select_winner(&votes) {
        Some(winner) => {
            let resolution = match &samples {
                SampleSet::Accepted(_) => Resolution::Sampled,
                SampleSet::Centroid(_) => Resolution::CentroidSample,
            };
            (Some(winner), resolution)
        }
        None => fallback(source.centroid(), &candidates),
    };

    debug!(
        source = source.id(),
        matched = target.unwrap_or(""),
        candidates = candidates.len(),
        samples = samples.accepted(),
        resolution = resolution.label(),
        "resolved source"
    );

    Assignment {
        source: source.id().to_string(),
        target: target.map(str::to_string),
        resolution,
        samples: samples.accepted(),
        candidates: candidates.len(),
    }
}

/// Count assignments per resolution, in [`Resolution::ALL`] order.
pub fn resolution_counts(assignments: &[Assignment]) -> [(Resolution, usize); 5] {
    Resolution::ALL.map(|r| (r, assignments.iter().filter(|a| a.resolution == r).count()))
}

/// Latitude correction for an equirectangular sample.
#[inline]
fn weight(p: Point) -> f64 { p.y.to_radians().cos() }

/// Each point votes, with weight `cos(lat)`, for the first candidate containing it.
fn tally<'a>(points: &[Point], candidates: &[&'a SpatialFeature]) -> AHashMap<&'a str, f64> {
    let mut votes = AHashMap::new();
    for &p in points {
        if let Some(&target) = candidates.iter().find(|target| target.contains(p)) {
            *votes.entry(target.id()).or_insert(0.0) += weight(p);
        }
    }
    votes
}

/// Heaviest total wins; equal totals go to the lexicographically smaller identifier.
fn select_winner<'a>(votes: &AHashMap<&'a str, f64>) -> Option<&'a str> {
    votes.iter()
        .max_by(|(a_id, a_w), (b_id, b_w)| a_w.total_cmp(b_w).then_with(|| b_id.cmp(a_id)))
        .map(|(id, _)| *id)
}

/// Used only when no sample voted: containing candidate, then nearest centroid, then none.
fn fallback<'a>(centroid: Point, candidates: &[&'a SpatialFeature]) -> (Option<&'a str>, Resolution) {
    if let Some(&target) = candidates.iter().find(|target| target.contains(centroid)) {
        return (Some(target.id()), Resolution::CentroidContained);
    }

    // min_by keeps the first of equal distances.
    candidates.iter()
        .min_by(|a, b| {
            centroid.distance_sq(a.centroid()).total_cmp(&centroid.distance_sq(b.centroid()))
        })
        .map_or((None, Resolution::Unmatched), |&target| {
            (Some(target.id()), Resolution::NearestCentroid)
        })
}
