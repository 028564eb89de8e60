use crate::feature::SpatialFeature;

/// Targets whose bounding box overlaps the source's, in their original order.
///
/// This is a superset of the targets that can actually contain part of the
/// source; no finer index is applied.
pub fn candidates<'a>(source: &SpatialFeature, targets: &'a [SpatialFeature]) -> Vec<&'a SpatialFeature> {
    let bbox = source.bbox();
    targets.iter()
        .filter(|target| bbox.overlaps(&target.bbox()))
        .collect()
}
