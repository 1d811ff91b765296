//! GeoJSON output for encode and decode results.
//!
//! This module converts codec results into GeoJSON features. Enable the
//! `geojson` feature to use this module.
//!
//! # Example
//!
//! ```
//! use gridpin::{decode, geojson::decoded_to_feature};
//!
//! let pin = decode("39J-49L-L8T4")?;
//! let feature = decoded_to_feature("39J-49L-L8T4", &pin);
//! assert!(feature.geometry.is_some());
//! # Ok::<(), gridpin::GridPinError>(())
//! ```

use geojson::{Feature, Geometry, JsonObject, JsonValue, Value as GeoJsonValue};

use crate::codec::DecodedPin;
use crate::grid::BoundingBox;

/// Build a GeoJSON Polygon geometry from a bounding box.
///
/// The ring is closed and wound counter-clockwise, coordinates in GeoJSON
/// order `[longitude, latitude]`.
pub fn bounds_to_polygon(bounds: &BoundingBox) -> Geometry {
    let ring = vec![
        vec![bounds.min_lon, bounds.min_lat],
        vec![bounds.max_lon, bounds.min_lat],
        vec![bounds.max_lon, bounds.max_lat],
        vec![bounds.min_lon, bounds.max_lat],
        vec![bounds.min_lon, bounds.min_lat],
    ];
    Geometry::new(GeoJsonValue::Polygon(vec![ring]))
}

/// Build a GeoJSON Feature for an encoded coordinate.
///
/// The feature carries a Point geometry at the input coordinate and the
/// generated code as a property.
pub fn encoded_to_feature(code: &str, lat: f64, lon: f64) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("code".to_string(), JsonValue::from(code));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(GeoJsonValue::Point(vec![lon, lat]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Build a GeoJSON Feature for a decoded code.
///
/// The feature carries the final-level cell as a Polygon geometry, the cell
/// extent as the feature `bbox`, and the code plus midpoint as properties.
pub fn decoded_to_feature(code: &str, pin: &DecodedPin) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("code".to_string(), JsonValue::from(code));
    properties.insert("latitude".to_string(), JsonValue::from(pin.latitude));
    properties.insert("longitude".to_string(), JsonValue::from(pin.longitude));

    Feature {
        bbox: Some(vec![
            pin.bounds.min_lon,
            pin.bounds.min_lat,
            pin.bounds.max_lon,
            pin.bounds.max_lat,
        ]),
        geometry: Some(bounds_to_polygon(&pin.bounds)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    #[test]
    fn test_bounds_to_polygon() {
        let bounds = BoundingBox::new(28.0, 77.0, 28.5, 77.5);
        let geometry = bounds_to_polygon(&bounds);

        if let GeoJsonValue::Polygon(rings) = geometry.value {
            assert_eq!(rings.len(), 1);
            assert_eq!(rings[0].len(), 5);
            assert_eq!(rings[0][0], rings[0][4]); // closed ring
            assert_eq!(rings[0][0], vec![77.0, 28.0]); // [lon, lat]
        } else {
            panic!("Expected Polygon geometry");
        }
    }

    #[test]
    fn test_encoded_to_feature() {
        let feature = encoded_to_feature("39J-49L-L8T4", 28.622788, 77.213033);

        let properties = feature.properties.unwrap();
        assert_eq!(properties["code"], "39J-49L-L8T4");

        if let Some(Geometry {
            value: GeoJsonValue::Point(coord),
            ..
        }) = feature.geometry
        {
            assert_eq!(coord, vec![77.213033, 28.622788]); // [lon, lat]
        } else {
            panic!("Expected Point geometry");
        }
    }

    #[test]
    fn test_decoded_to_feature() {
        let pin = decode("39J-49L-L8T4").unwrap();
        let feature = decoded_to_feature("39J-49L-L8T4", &pin);

        let bbox = feature.bbox.unwrap();
        assert_eq!(bbox.len(), 4);
        assert_eq!(bbox[0], pin.bounds.min_lon);
        assert_eq!(bbox[3], pin.bounds.max_lat);

        let properties = feature.properties.unwrap();
        assert_eq!(properties["code"], "39J-49L-L8T4");
        assert_eq!(properties["latitude"], pin.latitude);
        assert_eq!(properties["longitude"], pin.longitude);
    }
}
