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

use crate::json::{JsonValue, RawValue};
use crate::{
    classify, DecodeOptions, Error, Feature, Geometry, Kind, LineString, Point, Polygon,
    Properties, PropertyPolicy, Type,
};

/// Longest raw fragment quoted in an error message.
const FRAGMENT_LIMIT: usize = 120;

/// An object whose member values still hold their source text.
pub type RawObject<'a> = BTreeMap<String, &'a RawValue>;

/// Read and classify the 'type' member.
pub fn expect_type(object: &RawObject) -> Result<Type, Error> {
    let prop = expect_property(object, "type")?;
    match to_value(prop)? {
        JsonValue::String(s) => classify(&s),
        _ => Err(Error::ExpectedStringValue),
    }
}

pub fn to_value(raw: &RawValue) -> Result<JsonValue, Error> {
    Ok(serde_json::from_str(raw.get())?)
}

/// Re-encode an already parsed tree so it can go through the raw decoder.
pub fn to_raw(value: &JsonValue) -> Result<Box<RawValue>, Error> {
    Ok(serde_json::value::to_raw_value(value)?)
}

pub fn expect_array(raw: &RawValue) -> Result<Vec<&RawValue>, Error> {
    serde_json::from_str(raw.get()).map_err(|_| Error::ExpectedArrayValue)
}

pub fn expect_object(raw: &RawValue) -> Result<RawObject, Error> {
    serde_json::from_str(raw.get()).map_err(|_| Error::ExpectedObjectValue)
}

/// A member that is absent or `null` is missing.
pub fn expect_property<'a>(obj: &RawObject<'a>, name: &'static str) -> Result<&'a RawValue, Error> {
    match obj.get(name) {
        Some(v) if v.get() != "null" => Ok(*v),
        _ => Err(Error::ExpectedProperty(name.to_string())),
    }
}

/// Source text of `raw`, cut short for use in diagnostics.
pub fn fragment(raw: &RawValue) -> String {
    let text = raw.get();
    match text.char_indices().nth(FRAGMENT_LIMIT) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_owned(),
    }
}

/// Classify a nested object and check it has the kind its parent expects.
pub fn expect_nested_type(object: &RawObject, expected: Kind) -> Result<Type, Error> {
    let type_ = expect_type(object)?;
    if type_.kind() != expected {
        return Err(Error::InvalidNesting {
            expected,
            found: type_.kind(),
        });
    }
    Ok(type_)
}

/// Decode the elements of the 'geometries' member of a GeometryCollection.
///
/// Used by Value::GeometryCollection
pub fn get_geometries(
    geometries_array: &[&RawValue],
    options: &DecodeOptions,
) -> Result<Vec<Geometry>, Error> {
    let mut geometries = Vec::with_capacity(geometries_array.len());
    for (i, raw) in geometries_array.iter().enumerate() {
        let geometry = decode_child_geometry(raw, options)
            .map_err(|e| e.in_member("GeometryCollection", format!("geometries[{}]", i)))?;
        geometries.push(geometry);
    }
    Ok(geometries)
}

fn decode_child_geometry(raw: &RawValue, options: &DecodeOptions) -> Result<Geometry, Error> {
    let obj = expect_object(raw)?;
    let type_ = expect_nested_type(&obj, Kind::Geometry)?;
    Geometry::from_typed_object(type_, &obj, options)
}

/// Retrieve the 'geometry' member of a Feature.
///
/// Used by Feature
pub fn get_geometry(object: &RawObject, options: &DecodeOptions) -> Result<Geometry, Error> {
    let raw = expect_property(object, "geometry")?;
    decode_child_geometry(raw, options).map_err(|e| e.in_member("Feature", "geometry"))
}

/// Retrieve the 'features' member of a FeatureCollection.
///
/// Used by FeatureCollection
pub fn get_features(object: &RawObject, options: &DecodeOptions) -> Result<Vec<Feature>, Error> {
    let raw = expect_property(object, "features")?;
    let features_array =
        expect_array(raw).map_err(|e| e.in_member("FeatureCollection", "features"))?;
    let mut features = Vec::with_capacity(features_array.len());
    for (i, raw) in features_array.into_iter().enumerate() {
        let feature = expect_object(raw)
            .and_then(|obj| {
                expect_nested_type(&obj, Kind::Feature)?;
                Feature::from_typed_object(&obj, options)
            })
            .map_err(|e| e.in_member("FeatureCollection", format!("features[{}]", i)))?;
        features.push(feature);
    }
    Ok(features)
}

/// Retrieve the 'properties' member of a Feature if any.
///
/// Used by Feature
pub fn get_properties(object: &RawObject, policy: PropertyPolicy) -> Result<Properties, Error> {
    let properties = match object.get("properties") {
        Some(raw) => to_value(raw)?,
        None => return Ok(Properties::new()),
    };
    let properties = match properties {
        // If there is any 'properties' member, it must be an Object:
        JsonValue::Object(properties) => properties,
        // Null is handled as if there is no 'properties' member:
        JsonValue::Null => return Ok(Properties::new()),
        _ => return Err(Error::PropertiesExpectedObjectOrNull),
    };
    let mut res = Properties::new();
    for (key, value) in properties {
        let value = match (value, policy) {
            (JsonValue::String(s), _) => s,
            (JsonValue::Number(n), PropertyPolicy::Stringify) => n.to_string(),
            (JsonValue::Bool(b), PropertyPolicy::Stringify) => b.to_string(),
            _ => return Err(Error::PropertyType { key }),
        };
        res.insert(key, value);
    }
    Ok(res)
}

pub fn json_to_point(json: &JsonValue) -> Option<Point> {
    match json.as_array()?.as_slice() {
        [x, y] => Some([x.as_f64()?, y.as_f64()?]),
        _ => None,
    }
}

pub fn json_to_1d_points(json: &JsonValue) -> Option<LineString> {
    let coords_array = json.as_array()?;
    let mut coords = Vec::with_capacity(coords_array.len());
    for item in coords_array {
        coords.push(json_to_point(item)?);
    }
    Some(coords)
}

pub fn json_to_2d_points(json: &JsonValue) -> Option<Polygon> {
    let coords_array = json.as_array()?;
    let mut coords = Vec::with_capacity(coords_array.len());
    for item in coords_array {
        coords.push(json_to_1d_points(item)?);
    }
    Some(coords)
}

pub fn json_to_3d_points(json: &JsonValue) -> Option<Vec<Polygon>> {
    let coords_array = json.as_array()?;
    let mut coords = Vec::with_capacity(coords_array.len());
    for item in coords_array {
        coords.push(json_to_2d_points(item)?);
    }
    Some(coords)
}
