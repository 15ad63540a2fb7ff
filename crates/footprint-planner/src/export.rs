//! GeoJSON export of a beam layout

use crate::layout::{BeamLayout, Ring};
use crate::Result;
use footprint_core::LonLat;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

/// What a polygon feature outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    ReusedBeam,
    Beam,
    ElevationContour,
    ArrayBoundary,
    SatelliteIcon,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::ReusedBeam => "reused_beam",
            FeatureKind::Beam => "beam",
            FeatureKind::ElevationContour => "elevation_contour",
            FeatureKind::ArrayBoundary => "array_boundary",
            FeatureKind::SatelliteIcon => "satellite_icon",
        }
    }
}

fn polygon_feature(ring: &Ring, kind: FeatureKind, index: usize) -> Feature {
    let exterior: Vec<Vec<f64>> = ring.iter().map(LonLat::to_position).collect();

    let mut properties = JsonObject::new();
    properties.insert("kind".to_string(), JsonValue::from(kind.as_str()));
    properties.insert("index".to_string(), JsonValue::from(index));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![exterior]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn features_of<'a>(rings: impl IntoIterator<Item = &'a Ring>, kind: FeatureKind) -> Vec<Feature> {
    rings
        .into_iter()
        .enumerate()
        .map(|(index, ring)| polygon_feature(ring, kind, index))
        .collect()
}

/// Every ring of the layout as a polygon feature, with the metrics carried
/// as the collection's `metrics` member.
pub fn to_geojson(layout: &BeamLayout) -> Result<GeoJson> {
    let mut features = features_of(&layout.reused_beams, FeatureKind::ReusedBeam);
    features.extend(features_of(&layout.beams, FeatureKind::Beam));
    features.extend(features_of([&layout.elevation_contour], FeatureKind::ElevationContour));
    features.extend(features_of([&layout.array_boundary], FeatureKind::ArrayBoundary));
    features.extend(features_of(&layout.satellite_icon, FeatureKind::SatelliteIcon));

    let mut members = JsonObject::new();
    members.insert("metrics".to_string(), serde_json::to_value(&layout.metrics)?);

    Ok(GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(members),
    }))
}
