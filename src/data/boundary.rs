use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Boundary data model
// ---------------------------------------------------------------------------

/// A polygon in lon/lat degrees: one exterior ring plus any interior rings.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub exterior: Vec<[f64; 2]>,
    pub holes: Vec<Vec<[f64; 2]>>,
}

/// One named administrative region (kabupaten/kota) with its geometry.
#[derive(Debug, Clone)]
pub struct RegionFeature {
    /// Regency name from the `WADMKK` property.  Must equal the `Kabupaten`
    /// value in the commodity table for the join to find it.
    pub name: String,
    /// One entry for a Polygon geometry, several for a MultiPolygon.
    pub polygons: Vec<Polygon>,
}

/// All boundary features, in file order.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    pub features: Vec<RegionFeature>,
}

/// Structural problems in a boundary file.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("feature {0}: missing 'WADMKK' property")]
    MissingRegionName(usize),
    #[error("feature {0} ('{1}'): unsupported geometry type '{2}'")]
    UnsupportedGeometry(usize, String, String),
    #[error("feature {0} ('{1}'): position with fewer than 2 coordinates")]
    ShortPosition(usize, String),
    #[error("feature {0} ('{1}'): polygon with no rings")]
    EmptyPolygon(usize, String),
}

// ---------------------------------------------------------------------------
// Containment tests (used for hover hit testing)
// ---------------------------------------------------------------------------

impl Polygon {
    /// Even-odd containment: inside the exterior and outside every hole.
    pub fn contains(&self, point: [f64; 2]) -> bool {
        point_in_ring(&self.exterior, point)
            && !self.holes.iter().any(|hole| point_in_ring(hole, point))
    }
}

impl RegionFeature {
    pub fn contains(&self, point: [f64; 2]) -> bool {
        self.polygons.iter().any(|p| p.contains(point))
    }
}

impl BoundarySet {
    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the set has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Index of the first feature containing `point`, if any.
    pub fn feature_at(&self, point: [f64; 2]) -> Option<usize> {
        self.features.iter().position(|f| f.contains(point))
    }
}

/// Ray-cast point-in-ring test (even-odd rule).  Accepts both open and
/// closed rings; a duplicated closing vertex only adds a zero-length edge.
fn point_in_ring(ring: &[[f64; 2]], point: [f64; 2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let [px, py] = point;
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let [ax, ay] = ring[i];
        let [bx, by] = ring[j];
        if (ay > py) != (by > py) {
            // The edge straddles the horizontal through the point,
            // so ay != by and the division is safe.
            let x = ax + (py - ay) / (by - ay) * (bx - ax);
            if px < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

// ---------------------------------------------------------------------------
// GeoJSON loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: RawProperties,
    geometry: RawGeometry,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(rename = "WADMKK")]
    wadmkk: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: JsonValue,
}

/// Load the boundary file from disk.
pub fn load_boundaries(path: &Path) -> Result<BoundarySet> {
    let text = fs::read_to_string(path).context("reading boundary file")?;
    parse_geojson(&text)
}

/// Parse a GeoJSON FeatureCollection into a [`BoundarySet`].
///
/// Only `Polygon` and `MultiPolygon` geometries are accepted.  Positions may
/// carry an altitude; everything past the first two coordinates is dropped.
pub fn parse_geojson(text: &str) -> Result<BoundarySet> {
    let raw: RawCollection = serde_json::from_str(text).context("parsing GeoJSON")?;

    let mut features = Vec::with_capacity(raw.features.len());
    for (idx, feature) in raw.features.into_iter().enumerate() {
        let name = feature
            .properties
            .wadmkk
            .ok_or(BoundaryError::MissingRegionName(idx))?;

        let polygons = match feature.geometry.kind.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<Vec<f64>>> =
                    serde_json::from_value(feature.geometry.coordinates)
                        .with_context(|| format!("feature {idx} ('{name}'): Polygon coordinates"))?;
                vec![polygon_from_rings(rings, idx, &name)?]
            }
            "MultiPolygon" => {
                let polys: Vec<Vec<Vec<Vec<f64>>>> =
                    serde_json::from_value(feature.geometry.coordinates).with_context(|| {
                        format!("feature {idx} ('{name}'): MultiPolygon coordinates")
                    })?;
                polys
                    .into_iter()
                    .map(|rings| polygon_from_rings(rings, idx, &name))
                    .collect::<Result<Vec<_>>>()?
            }
            other => {
                return Err(
                    BoundaryError::UnsupportedGeometry(idx, name, other.to_string()).into(),
                );
            }
        };

        features.push(RegionFeature { name, polygons });
    }

    Ok(BoundarySet { features })
}

fn polygon_from_rings(rings: Vec<Vec<Vec<f64>>>, idx: usize, name: &str) -> Result<Polygon> {
    let mut converted = rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(|pos| match pos.as_slice() {
                    [lon, lat, ..] => Ok([*lon, *lat]),
                    _ => Err(BoundaryError::ShortPosition(idx, name.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    if converted.is_empty() {
        return Err(BoundaryError::EmptyPolygon(idx, name.to_string()).into());
    }
    let exterior = converted.remove(0);
    Ok(Polygon {
        exterior,
        holes: converted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"WADMKK": "Kupang", "PROVINSI": "Nusa Tenggara Timur"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"WADMKK": "Sikka"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[10.0, 0.0], [12.0, 0.0], [12.0, 2.0], [10.0, 2.0], [10.0, 0.0]]],
                        [[[14.0, 0.0, 5.0], [16.0, 0.0, 5.0], [16.0, 2.0, 5.0], [14.0, 2.0, 5.0]]]
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn feature_collection_parses() {
        let bounds = parse_geojson(COLLECTION).unwrap();
        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds.features[0].name, "Kupang");
        assert_eq!(bounds.features[0].polygons.len(), 1);
        assert_eq!(bounds.features[1].name, "Sikka");
        assert_eq!(bounds.features[1].polygons.len(), 2);
        // Altitude coordinates are dropped, lon/lat kept.
        assert_eq!(bounds.features[1].polygons[1].exterior[0], [14.0, 0.0]);
    }

    #[test]
    fn missing_region_name_is_rejected() {
        let broken = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"PROVINSI": "NTT"},
                "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]}
            }]
        }"#;
        let err = parse_geojson(broken).unwrap_err();
        assert!(err.to_string().contains("WADMKK"), "{err}");
    }

    #[test]
    fn unsupported_geometry_is_rejected() {
        let broken = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"WADMKK": "Ende"},
                "geometry": {"type": "Point", "coordinates": [121.6, -8.8]}
            }]
        }"#;
        let err = parse_geojson(broken).unwrap_err();
        assert!(err.to_string().contains("Point"), "{err}");
    }

    #[test]
    fn containment_square_and_outside() {
        let bounds = parse_geojson(COLLECTION).unwrap();
        assert!(bounds.features[0].contains([2.0, 2.0]));
        assert!(!bounds.features[0].contains([5.0, 2.0]));
        // Second MultiPolygon part of Sikka.
        assert!(bounds.features[1].contains([15.0, 1.0]));
        assert_eq!(bounds.feature_at([2.0, 2.0]), Some(0));
        assert_eq!(bounds.feature_at([11.0, 1.0]), Some(1));
        assert_eq!(bounds.feature_at([7.0, 1.0]), None);
    }

    #[test]
    fn containment_respects_holes() {
        let poly = Polygon {
            exterior: vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
            holes: vec![vec![[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]]],
        };
        assert!(poly.contains([2.0, 2.0]));
        assert!(!poly.contains([5.0, 5.0]), "point inside the hole");
        assert!(!poly.contains([11.0, 5.0]));
    }

    #[test]
    fn containment_concave_ring() {
        // U shape: the notch between the arms is outside.
        let ring = vec![
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 4.0],
            [3.0, 4.0],
            [3.0, 1.0],
            [1.0, 1.0],
            [1.0, 4.0],
            [0.0, 4.0],
        ];
        let poly = Polygon {
            exterior: ring,
            holes: Vec::new(),
        };
        assert!(poly.contains([0.5, 2.0]), "left arm");
        assert!(poly.contains([3.5, 2.0]), "right arm");
        assert!(poly.contains([2.0, 0.5]), "base");
        assert!(!poly.contains([2.0, 3.0]), "the notch");
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        let poly = Polygon {
            exterior: vec![[0.0, 0.0], [1.0, 1.0]],
            holes: Vec::new(),
        };
        assert!(!poly.contains([0.5, 0.5]));
    }
}
