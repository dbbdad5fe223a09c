// Copyright 2018 The GeoRust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;

use crate::json::{Deserialize, Deserializer, JsonValue, RawValue, Serialize, Serializer};
use crate::util::RawObject;
use crate::{util, DecodeOptions, Error, Geometry, Kind, Type};

/// String keyed, string valued Feature properties.
pub type Properties = BTreeMap<String, String>;

/// Feature Objects
///
/// [GeoJSON Format Specification § 3.2](https://tools.ietf.org/html/rfc7946#section-3.2)
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    /// Decode the rest of an object already classified as a Feature.
    pub(crate) fn from_typed_object(object: &RawObject, options: &DecodeOptions) -> Result<Self, Error> {
        let geometry = util::get_geometry(object, options)?;
        let properties = util::get_properties(object, options.properties)
            .map_err(|e| e.in_member("Feature", "properties"))?;
        Ok(Feature {
            geometry,
            properties,
        })
    }
}

/// Feature Collection Objects
///
/// [GeoJSON Format Specification § 3.3](https://tools.ietf.org/html/rfc7946#section-3.3)
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub(crate) fn from_typed_object(object: &RawObject, options: &DecodeOptions) -> Result<Self, Error> {
        Ok(FeatureCollection {
            features: util::get_features(object, options)?,
        })
    }
}

/// A decoded GeoJSON object: a Geometry, a Feature or a FeatureCollection
///
/// [GeoJSON Format Specification § 3](https://tools.ietf.org/html/rfc7946#section-3)
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl Member {
    pub fn kind(&self) -> Kind {
        match *self {
            Member::Geometry(..) => Kind::Geometry,
            Member::Feature(..) => Kind::Feature,
            Member::FeatureCollection(..) => Kind::FeatureCollection,
        }
    }

    /// The `type` string this member was decoded from.
    pub fn type_name(&self) -> &'static str {
        match *self {
            Member::Geometry(ref g) => g.type_name(),
            Member::Feature(..) => Type::Feature.as_str(),
            Member::FeatureCollection(..) => Type::FeatureCollection.as_str(),
        }
    }

    /// Decode a member from its source text.
    ///
    /// Diagnostics quote fragments of `raw` exactly as written.
    pub fn from_raw(raw: &RawValue, options: &DecodeOptions) -> Result<Self, Error> {
        let object = util::expect_object(raw)?;
        let type_ = util::expect_type(&object)?;
        log::trace!("decoding {} member", type_);
        match type_.kind() {
            Kind::Geometry => Geometry::from_typed_object(type_, &object, options).map(Member::Geometry),
            Kind::Feature => Feature::from_typed_object(&object, options).map(Member::Feature),
            Kind::FeatureCollection => {
                FeatureCollection::from_typed_object(&object, options).map(Member::FeatureCollection)
            }
        }
    }

    /// Decode an already parsed tree. Fragments in diagnostics are the
    /// tree re-encoded, not the text it was parsed from.
    pub fn from_json_value(value: &JsonValue, options: &DecodeOptions) -> Result<Self, Error> {
        Member::from_raw(&util::to_raw(value)?, options)
    }
}

impl From<Geometry> for Member {
    fn from(geometry: Geometry) -> Self {
        Member::Geometry(geometry)
    }
}

impl From<Feature> for Member {
    fn from(feature: Feature) -> Self {
        Member::Feature(feature)
    }
}

impl From<FeatureCollection> for Member {
    fn from(collection: FeatureCollection) -> Self {
        Member::FeatureCollection(collection)
    }
}

impl Serialize for Feature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", Type::Feature.as_str())?;
        map.serialize_entry("geometry", &self.geometry)?;
        map.serialize_entry("properties", &self.properties)?;
        map.end()
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", Type::FeatureCollection.as_str())?;
        map.serialize_entry("features", &self.features)?;
        map.end()
    }
}

impl Serialize for Member {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Member::Geometry(ref g) => g.serialize(serializer),
            Member::Feature(ref f) => f.serialize(serializer),
            Member::FeatureCollection(ref fc) => fc.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Member {
    fn deserialize<D>(deserializer: D) -> Result<Member, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as SerdeError;

        let val = JsonValue::deserialize(deserializer)?;

        Member::from_json_value(&val, &DecodeOptions::default()).map_err(D::Error::custom)
    }
}

impl FromStr for Member {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode_member(s.as_bytes())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ::serde_json::to_string(self)
            .map_err(|_| fmt::Error)
            .and_then(|s| f.write_str(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::{Feature, FeatureCollection, Member, Properties};
    use crate::{DecodeOptions, Error, Geometry, Kind, Value};
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Member, Error> {
        Member::from_json_value(&value, &DecodeOptions::default())
    }

    fn point_feature(x: f64, y: f64, name: &str) -> Feature {
        let mut properties = Properties::new();
        properties.insert(String::from("name"), String::from(name));
        Feature {
            geometry: Geometry::new(Value::Point([x, y])),
            properties,
        }
    }

    #[test]
    fn decode_feature() {
        let member = decode(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [1.23, 4.56]},
            "properties": {"name": "point:A"}
        }))
        .unwrap();
        assert_eq!(member.kind(), Kind::Feature);
        assert_eq!(member.type_name(), "Feature");
        assert_eq!(member, Member::Feature(point_feature(1.23, 4.56, "point:A")));
    }

    #[test]
    fn decode_feature_without_properties() {
        let member = decode(json!({
            "type": "Feature",
            "bbox": [0, 0, 1, 1],
            "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
        }))
        .unwrap();
        match member {
            Member::Feature(f) => {
                assert!(f.properties.is_empty());
                assert_eq!(f.geometry.type_name(), "LineString");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn decode_feature_missing_geometry() {
        assert_eq!(
            decode(json!({"type": "Feature", "properties": {}})),
            Err(Error::ExpectedProperty(String::from("geometry")))
        );
    }

    #[test]
    fn decode_feature_nested_in_feature() {
        let err = decode(json!({
            "type": "Feature",
            "geometry": {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [0, 0]}
            }
        }))
        .unwrap_err();
        assert_eq!(
            err.root_cause(),
            &Error::InvalidNesting {
                expected: Kind::Geometry,
                found: Kind::Feature,
            }
        );
        assert!(matches!(err, Error::InMember { ref member, .. } if member == "geometry"));

        let err = decode(json!({
            "type": "Feature",
            "geometry": {"type": "FeatureCollection", "features": []}
        }))
        .unwrap_err();
        assert_eq!(
            err.root_cause(),
            &Error::InvalidNesting {
                expected: Kind::Geometry,
                found: Kind::FeatureCollection,
            }
        );
    }

    #[test]
    fn decode_feature_bad_property() {
        let err = decode(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [0, 0]},
            "properties": {"name": "A", "population": 10}
        }))
        .unwrap_err();
        assert_eq!(
            err.root_cause(),
            &Error::PropertyType {
                key: String::from("population")
            }
        );
    }

    #[test]
    fn decode_feature_collection() {
        let member = decode(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}, "properties": {"name": "a"}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [3, 4]}, "properties": {"name": "b"}}
            ]
        }))
        .unwrap();
        assert_eq!(
            member,
            Member::FeatureCollection(FeatureCollection {
                features: vec![point_feature(1.0, 2.0, "a"), point_feature(3.0, 4.0, "b")],
            })
        );
    }

    #[test]
    fn decode_feature_collection_with_geometry_element() {
        let err = decode(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}},
                {"type": "Point", "coordinates": [3, 4]}
            ]
        }))
        .unwrap_err();
        assert_eq!(
            err,
            Error::InMember {
                type_name: String::from("FeatureCollection"),
                member: String::from("features[1]"),
                source: Box::new(Error::InvalidNesting {
                    expected: Kind::Feature,
                    found: Kind::Geometry,
                }),
            }
        );
        assert_eq!(
            decode(json!({"type": "FeatureCollection"})),
            Err(Error::ExpectedProperty(String::from("features")))
        );
    }

    #[test]
    fn decode_missing_or_bad_type() {
        assert_eq!(
            decode(json!({"coordinates": [1, 2]})),
            Err(Error::ExpectedProperty(String::from("type")))
        );
        assert_eq!(
            decode(json!({"type": 7, "coordinates": [1, 2]})),
            Err(Error::ExpectedStringValue)
        );
        assert_eq!(
            decode(json!({"type": "point", "coordinates": [1, 2]})),
            Err(Error::UnknownType(String::from("point")))
        );
        assert_eq!(decode(json!([1, 2])), Err(Error::ExpectedObjectValue));
    }

    #[test]
    fn encode_feature() {
        let member = Member::Feature(point_feature(1.5, 2.5, "x"));
        assert_eq!(
            member.to_string(),
            "{\"type\":\"Feature\",\"geometry\":{\"type\":\"Point\",\"coordinates\":[1.5,2.5]},\"properties\":{\"name\":\"x\"}}"
        );
    }

    #[test]
    fn display_output_decodes_to_equal_member() {
        let member = Member::FeatureCollection(FeatureCollection {
            features: vec![
                point_feature(1.23, 4.56, "point:A"),
                Feature {
                    geometry: Geometry::new(Value::MultiPolygon(vec![vec![vec![
                        [0.0, 0.0],
                        [1.0, 0.0],
                        [1.0, 1.0],
                        [0.0, 0.0],
                    ]]])),
                    properties: Properties::new(),
                },
            ],
        });
        let text = member.to_string();
        assert_eq!(text.parse::<Member>(), Ok(member.clone()));
        let via_serde: Member = serde_json::from_str(&text).unwrap();
        assert_eq!(via_serde, member);
    }

    #[test]
    fn decode_feature_collection_without_array() {
        let err = decode(json!({"type": "FeatureCollection", "features": {"a": 1}})).unwrap_err();
        assert_eq!(
            err,
            Error::InMember {
                type_name: String::from("FeatureCollection"),
                member: String::from("features"),
                source: Box::new(Error::ExpectedArrayValue),
            }
        );
        assert_eq!(
            err.to_string(),
            "In 'features' member of a 'FeatureCollection': Expected an array."
        );
    }

    #[test]
    fn nested_shape_error_quotes_source_text() {
        let raw = crate::RawValue::from_string(String::from(
            r#"{"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 0], [1e0, 2.50, 3]]}}"#,
        ))
        .unwrap();
        let err = Member::from_raw(&raw, &DecodeOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::InMember {
                type_name: String::from("Feature"),
                member: String::from("geometry"),
                source: Box::new(Error::CoordinateShape {
                    type_name: String::from("LineString"),
                    fragment: String::from("[[0, 0], [1e0, 2.50, 3]]"),
                }),
            }
        );
    }
}
