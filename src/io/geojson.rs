//! GeoJSON FeatureCollection loading.

use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::{feature::SpatialFeature, geom::GeometryRecord};

/// Read a GeoJSON FeatureCollection from `path`, taking each feature's identifier
/// from `properties[id_field]`.
pub fn read_features(path: &Path, id_field: &str) -> Result<Vec<SpatialFeature>> {
    let bytes = fs::read(path)
        .with_context(|| format!("[io::geojson] Failed to read GeoJSON file: {}", path.display()))?;
    parse_features(&bytes, id_field)
        .with_context(|| format!("[io::geojson] Failed to load features from {}", path.display()))
}

/// Parse a GeoJSON FeatureCollection from bytes.
pub fn parse_features(bytes: &[u8], id_field: &str) -> Result<Vec<SpatialFeature>> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Failed to parse GeoJSON bytes")?;
    let features = value.get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("[io::geojson] Expected a FeatureCollection with a `features` array"))?;

    features.iter().enumerate()
        .map(|(idx, feature)| parse_feature(feature, id_field)
            .with_context(|| format!("[io::geojson] Invalid feature at index {idx}")))
        .collect()
}

fn parse_feature(feature: &Value, id_field: &str) -> Result<SpatialFeature> {
    let id = feature.get("properties")
        .and_then(|props| props.get(id_field))
        .and_then(identifier_string)
        .ok_or_else(|| anyhow!("missing identifier property `{id_field}`"))?;

    let geometry = feature.get("geometry")
        .filter(|g| !g.is_null())
        .ok_or_else(|| anyhow!("feature `{id}` has no geometry"))?;
    let record = GeometryRecord::deserialize(geometry).context("malformed geometry object")?;
    let multipolygon = record.to_multipolygon()
        .with_context(|| format!("feature `{id}` has unusable geometry"))?;

    Ok(SpatialFeature::new(id, multipolygon))
}

/// Property values as identifier text: strings verbatim, scalars by their JSON text.
fn identifier_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
