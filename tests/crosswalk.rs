// Integration tests for dominant-geography assignment:
//   enclosed / straddling / disjoint / degenerate sources, the centroid fallbacks,
//   determinism across runs and execution modes, and pruning soundness.

use geocrosswalk::{
    assign, assign_detailed, assign_with, candidates, CrosswalkConfig, MultiPolygon, Point,
    Polygon, Resolution, Ring, SpatialFeature,
};

fn ring(coords: &[(f64, f64)]) -> Ring {
    Ring::close(coords.iter().copied())
}

fn rect_ring(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring {
    ring(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
}

fn rect(id: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> SpatialFeature {
    SpatialFeature::new(id, Polygon::new(rect_ring(x0, y0, x1, y1), vec![]).into())
}

/// Square [0, 10]² with a clockwise hole [1, 9]², centroid (5, 5).
fn annulus(id: &str) -> SpatialFeature {
    let hole = ring(&[(1.0, 1.0), (1.0, 9.0), (9.0, 9.0), (9.0, 1.0)]);
    SpatialFeature::new(id, Polygon::new(rect_ring(0.0, 0.0, 10.0, 10.0), vec![hole]).into())
}

fn sequential() -> CrosswalkConfig {
    CrosswalkConfig::default().with_parallel(false)
}

#[test]
fn enclosed_source_maps_to_enclosing_target() {
    let sources = vec![rect("17031010100", -87.66, 41.99, -87.65, 42.0)];
    let targets = vec![
        rect("60626", -87.70, 41.95, -87.60, 42.05),
        rect("60601", -87.63, 41.87, -87.61, 41.89),
    ];
    assert_eq!(assign(&sources, &targets), vec![("17031010100".to_string(), Some("60626".to_string()))]);

    let detail = &assign_detailed(&sources, &targets, &sequential())[0];
    assert_eq!(detail.resolution, Resolution::Sampled);
    assert_eq!(detail.samples, 80);
    assert_eq!(detail.candidates, 1);
}

// Checks the two-candidate straddle only; sampled totals do not tie exactly, so the
// lexicographic tie-break is pinned by the mirrored-sample unit test in `assign.rs`.
#[test]
fn straddling_source_picks_one_of_two_halves() {
    let sources = vec![rect("tract", 0.0, 40.0, 2.0, 41.0)];
    let targets = vec![
        rect("b-east", 1.0, 39.0, 3.0, 42.0),
        rect("a-west", -1.0, 39.0, 1.0, 42.0),
    ];
    let detail = &assign_detailed(&sources, &targets, &sequential())[0];
    assert_eq!(detail.resolution, Resolution::Sampled);
    assert_eq!(detail.candidates, 2);
    assert!(matches!(detail.target.as_deref(), Some("a-west") | Some("b-east")));
}

#[test]
fn source_without_overlap_maps_to_none() {
    let sources = vec![rect("lonely", 100.0, 10.0, 101.0, 11.0)];
    let targets = vec![rect("60601", -87.63, 41.87, -87.61, 41.89)];
    assert_eq!(assign(&sources, &targets), vec![("lonely".to_string(), None)]);
    assert_eq!(assign_detailed(&sources, &targets, &sequential())[0].resolution, Resolution::Unmatched);
}

#[test]
fn degenerate_source_uses_its_centroid() {
    // Zero-area sliver: no rejection sample lands inside, so the first vertex (1, 1) votes alone.
    let sliver = SpatialFeature::new(
        "sliver",
        Polygon::new(ring(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]), vec![]).into(),
    );
    let targets = vec![rect("outer", 0.0, 0.0, 5.0, 5.0), rect("corner", 2.5, 2.5, 10.0, 10.0)];
    let detail = &assign_detailed(&[sliver], &targets, &sequential())[0];
    assert_eq!(detail.target.as_deref(), Some("outer"));
    assert_eq!(detail.resolution, Resolution::CentroidSample);
    assert_eq!(detail.samples, 0);
    assert_eq!(detail.candidates, 2);
}

#[test]
fn flat_sliver_votes_along_its_length() {
    // Zero-height source: draws land on the line itself, so the target covering
    // most of its length wins rather than the one holding its first vertex.
    let sliver = SpatialFeature::new(
        "sliver",
        Polygon::new(ring(&[(0.0, 5.0), (3.0, 5.0), (1.5, 5.0)]), vec![]).into(),
    );
    let targets = vec![rect("a-left", -1.0, 4.0, 0.5, 6.0), rect("b-right", 0.5, 4.0, 4.0, 6.0)];
    let detail = &assign_detailed(&[sliver], &targets, &sequential())[0];
    assert_eq!(detail.resolution, Resolution::Sampled);
    assert_eq!(detail.samples, 80);
    assert_eq!(detail.target.as_deref(), Some("b-right"));
}

#[test]
fn unvoted_source_falls_back_to_containing_candidate() {
    // Target sits inside the hole: samples land in the ring, the centroid lands in the target.
    let targets = vec![rect("hole-filler", 4.0, 4.0, 6.0, 6.0)];
    let detail = &assign_detailed(&[annulus("ring")], &targets, &sequential())[0];
    assert!(detail.samples > 0);
    assert_eq!(detail.resolution, Resolution::CentroidContained);
    assert_eq!(detail.target.as_deref(), Some("hole-filler"));
}

#[test]
fn unvoted_source_falls_back_to_nearest_centroid() {
    let targets = vec![
        rect("t1", 2.0, 2.0, 3.0, 3.0),   // centroid distance² 12.5
        rect("t2", 6.5, 6.5, 7.5, 7.5),   // centroid distance² 8
    ];
    let detail = &assign_detailed(&[annulus("ring")], &targets, &sequential())[0];
    assert_eq!(detail.resolution, Resolution::NearestCentroid);
    assert_eq!(detail.target.as_deref(), Some("t2"));
}

#[test]
fn multipolygon_source_votes_across_members() {
    let parts = MultiPolygon::new(vec![
        Polygon::new(rect_ring(0.0, 0.0, 1.0, 1.0), vec![]),
        Polygon::new(rect_ring(5.0, 0.0, 9.0, 4.0), vec![]),
    ]).unwrap();
    let sources = vec![SpatialFeature::new("islands", parts)];
    let targets = vec![rect("small", -1.0, -1.0, 2.0, 2.0), rect("large", 4.0, -1.0, 10.0, 5.0)];
    assert_eq!(assign(&sources, &targets)[0].1.as_deref(), Some("large"));
}

#[test]
fn output_preserves_source_order() {
    let sources: Vec<_> = (0..20)
        .map(|i| {
            let x = i as f64;
            rect(&format!("s{i:02}"), x + 0.25, 0.25, x + 0.75, 0.75)
        })
        .collect();
    let targets: Vec<_> = (0..20)
        .rev()
        .map(|i| {
            let x = i as f64;
            rect(&format!("t{i:02}"), x, 0.0, x + 1.0, 1.0)
        })
        .collect();

    let mapping = assign(&sources, &targets);
    for (i, (source, target)) in mapping.iter().enumerate() {
        assert_eq!(source, &format!("s{i:02}"));
        assert_eq!(target.as_deref(), Some(format!("t{i:02}").as_str()));
    }
}

#[test]
fn reruns_are_identical() {
    let sources: Vec<_> = (0..12)
        .map(|i| {
            let x = i as f64 * 0.7;
            rect(&format!("tract-{i}"), x, 41.0, x + 1.3, 42.1)
        })
        .collect();
    let targets: Vec<_> = (0..6)
        .map(|i| {
            let x = i as f64 * 1.5;
            rect(&format!("zip-{i}"), x, 40.5, x + 1.5, 42.5)
        })
        .collect();

    let first = assign_detailed(&sources, &targets, &sequential());
    let second = assign_detailed(&sources, &targets, &sequential());
    let parallel = assign_detailed(&sources, &targets, &CrosswalkConfig::default());
    assert_eq!(first, second);
    assert_eq!(first, parallel);
    assert_eq!(assign(&sources, &targets), assign_with(&sources, &targets, &sequential()));
}

#[test]
fn pruning_never_drops_a_containing_target() {
    let sources = vec![
        rect("a", 0.3, 0.3, 2.7, 1.4),
        annulus("b"),
        rect("c", 7.9, 7.9, 8.1, 8.1),
    ];
    let targets: Vec<_> = (0..5)
        .flat_map(|i| (0..5).map(move |j| (i, j)))
        .map(|(i, j)| {
            let (x, y) = (i as f64 * 2.0, j as f64 * 2.0);
            rect(&format!("{i}-{j}"), x, y, x + 2.0, y + 2.0)
        })
        .collect();

    for source in &sources {
        let found = candidates(source, &targets);
        let bbox = source.bbox();
        for step_x in 0..=20 {
            for step_y in 0..=20 {
                let p = Point::new(
                    bbox.min_x + bbox.width() * step_x as f64 / 20.0,
                    bbox.min_y + bbox.height() * step_y as f64 / 20.0,
                );
                if !source.contains(p) { continue }
                for target in targets.iter().filter(|t| t.contains(p)) {
                    assert!(
                        found.iter().any(|c| c.id() == target.id()),
                        "target {} contains {:?} of source {} but was pruned", target.id(), p, source.id(),
                    );
                }
            }
        }
    }
}
