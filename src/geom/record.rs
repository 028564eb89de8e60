use serde::Deserialize;
use serde_json::Value;

use crate::error::GeometryError;

use super::{MultiPolygon, Point, Polygon, Ring};

/// A raw geometry as it appears in a GeoJSON feature: a type tag plus nested coordinate arrays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeometryRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

/// Rings of one polygon: exterior first, then holes.
type RingCoords = Vec<Vec<Vec<f64>>>;

impl GeometryRecord {
    pub fn new(kind: impl Into<String>, coordinates: Value) -> Self {
        Self { kind: kind.into(), coordinates }
    }

    /// Convert into a `MultiPolygon`. A `Polygon` record yields a single member.
    pub fn to_multipolygon(&self) -> Result<MultiPolygon, GeometryError> {
        match self.kind.as_str() {
            "Polygon" => {
                let rings: RingCoords = decode(&self.coordinates, "Polygon")?;
                Ok(build_polygon(rings)?.into())
            }
            "MultiPolygon" => {
                let groups: Vec<RingCoords> = decode(&self.coordinates, "MultiPolygon")?;
                let polygons = groups.into_iter()
                    .map(build_polygon)
                    .collect::<Result<Vec<_>, _>>()?;
                MultiPolygon::new(polygons)
            }
            other => Err(GeometryError::UnsupportedType(other.to_string())),
        }
    }
}

impl TryFrom<&GeometryRecord> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(record: &GeometryRecord) -> Result<Self, Self::Error> { record.to_multipolygon() }
}

fn decode<T: serde::de::DeserializeOwned>(coords: &Value, kind: &str) -> Result<T, GeometryError> {
    T::deserialize(coords)
        .map_err(|e| GeometryError::InvalidCoordinates(format!("{kind}: {e}")))
}

/// First ring is the exterior, the rest are holes. No rings at all gives an empty exterior.
fn build_polygon(rings: RingCoords) -> Result<Polygon, GeometryError> {
    let mut rings = rings.into_iter()
        .map(build_ring)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();
    let exterior = rings.next().unwrap_or_default();
    Ok(Polygon::new(exterior, rings.collect()))
}

fn build_ring(coords: Vec<Vec<f64>>) -> Result<Ring, GeometryError> {
    let points = coords.into_iter()
        .map(|pair| match pair.as_slice() {
            [x, y, ..] => Ok(Point::new(*x, *y)),
            _ => Err(GeometryError::InvalidCoordinates(
                format!("expected [x, y] position, found {} value(s)", pair.len())
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Ring::close(points))
}
