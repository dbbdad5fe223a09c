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

use serde::ser::SerializeMap;

use crate::json::{Deserialize, Deserializer, JsonValue, RawValue, Serialize, Serializer};
use crate::util::RawObject;
use crate::{util, DecodeOptions, Error, Kind, LineString, Point, Polygon, Type};

/// The coordinates of a Geometry, shaped by its type
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Point
    ///
    /// [GeoJSON Format Specification § 3.1.2](https://tools.ietf.org/html/rfc7946#section-3.1.2)
    Point(Point),

    /// MultiPoint
    ///
    /// [GeoJSON Format Specification § 3.1.3](https://tools.ietf.org/html/rfc7946#section-3.1.3)
    MultiPoint(Vec<Point>),

    /// LineString
    ///
    /// [GeoJSON Format Specification § 3.1.4](https://tools.ietf.org/html/rfc7946#section-3.1.4)
    LineString(LineString),

    /// MultiLineString
    ///
    /// [GeoJSON Format Specification § 3.1.5](https://tools.ietf.org/html/rfc7946#section-3.1.5)
    MultiLineString(Vec<LineString>),

    /// Polygon
    ///
    /// [GeoJSON Format Specification § 3.1.6](https://tools.ietf.org/html/rfc7946#section-3.1.6)
    Polygon(Polygon),

    /// MultiPolygon
    ///
    /// [GeoJSON Format Specification § 3.1.7](https://tools.ietf.org/html/rfc7946#section-3.1.7)
    MultiPolygon(Vec<Polygon>),

    /// GeometryCollection
    ///
    /// [GeoJSON Format Specification § 3.1.8](https://tools.ietf.org/html/rfc7946#section-3.1.8)
    GeometryCollection(Vec<Geometry>),
}

impl Value {
    pub fn type_(&self) -> Type {
        match *self {
            Value::Point(..) => Type::Point,
            Value::MultiPoint(..) => Type::MultiPoint,
            Value::LineString(..) => Type::LineString,
            Value::MultiLineString(..) => Type::MultiLineString,
            Value::Polygon(..) => Type::Polygon,
            Value::MultiPolygon(..) => Type::MultiPolygon,
            Value::GeometryCollection(..) => Type::GeometryCollection,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Value::Point(ref x) => x.serialize(serializer),
            Value::MultiPoint(ref x) => x.serialize(serializer),
            Value::LineString(ref x) => x.serialize(serializer),
            Value::MultiLineString(ref x) => x.serialize(serializer),
            Value::Polygon(ref x) => x.serialize(serializer),
            Value::MultiPolygon(ref x) => x.serialize(serializer),
            Value::GeometryCollection(ref x) => x.serialize(serializer),
        }
    }
}

/// Decode the raw coordinates of a geometry of type `type_`.
///
/// For a GeometryCollection, `raw` is the value of its `geometries` member
/// and every element is decoded as a nested geometry. Shape errors quote
/// `raw` as it appeared in the input.
pub fn decode_coordinates(
    type_: Type,
    raw: &RawValue,
    options: &DecodeOptions,
) -> Result<Value, Error> {
    match type_ {
        Type::GeometryCollection => {
            let geometries = util::expect_array(raw).map_err(|_| shape_error(type_, raw))?;
            Ok(Value::GeometryCollection(util::get_geometries(&geometries, options)?))
        }
        Type::Feature | Type::FeatureCollection => Err(Error::InvalidNesting {
            expected: Kind::Geometry,
            found: type_.kind(),
        }),
        _ => decode_positions(type_, raw, options),
    }
}

fn shape_error(type_: Type, raw: &RawValue) -> Error {
    Error::CoordinateShape {
        type_name: type_.as_str().to_owned(),
        fragment: util::fragment(raw),
    }
}

fn decode_positions(type_: Type, raw: &RawValue, options: &DecodeOptions) -> Result<Value, Error> {
    let json = util::to_value(raw)?;
    let mismatch = || shape_error(type_, raw);
    let value = match type_ {
        Type::Point => Value::Point(util::json_to_point(&json).ok_or_else(mismatch)?),
        Type::MultiPoint => Value::MultiPoint(util::json_to_1d_points(&json).ok_or_else(mismatch)?),
        Type::LineString => {
            let line = util::json_to_1d_points(&json).ok_or_else(mismatch)?;
            check_line(type_, &line, options)?;
            Value::LineString(line)
        }
        Type::MultiLineString => {
            let lines = util::json_to_2d_points(&json).ok_or_else(mismatch)?;
            for line in &lines {
                check_line(type_, line, options)?;
            }
            Value::MultiLineString(lines)
        }
        Type::Polygon => {
            let rings = util::json_to_2d_points(&json).ok_or_else(mismatch)?;
            check_polygon(type_, &rings, raw, options)?;
            Value::Polygon(rings)
        }
        Type::MultiPolygon => {
            let polygons = util::json_to_3d_points(&json).ok_or_else(mismatch)?;
            for rings in &polygons {
                check_polygon(type_, rings, raw, options)?;
            }
            Value::MultiPolygon(polygons)
        }
        Type::GeometryCollection | Type::Feature | Type::FeatureCollection => return Err(mismatch()),
    };
    Ok(value)
}

fn check_line(type_: Type, line: &[Point], options: &DecodeOptions) -> Result<(), Error> {
    if options.strict_positions && line.len() < 2 {
        return Err(Error::TooFewPoints {
            type_name: type_.as_str().to_owned(),
            min: 2,
            found: line.len(),
        });
    }
    Ok(())
}

fn check_polygon(
    type_: Type,
    rings: &[LineString],
    raw: &RawValue,
    options: &DecodeOptions,
) -> Result<(), Error> {
    for ring in rings {
        if options.strict_positions && ring.len() < 4 {
            return Err(Error::TooFewPoints {
                type_name: type_.as_str().to_owned(),
                min: 4,
                found: ring.len(),
            });
        }
        if options.closed_rings && ring.first() != ring.last() {
            return Err(Error::RingNotClosed {
                type_name: type_.as_str().to_owned(),
                fragment: util::fragment(raw),
            });
        }
    }
    Ok(())
}

/// Geometry Objects
///
/// [GeoJSON Format Specification § 3.1](https://tools.ietf.org/html/rfc7946#section-3.1)
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub value: Value,
}

impl Geometry {
    pub fn new(value: Value) -> Self {
        Geometry { value }
    }

    /// The `type` string this geometry was decoded from.
    pub fn type_name(&self) -> &'static str {
        self.value.type_().as_str()
    }

    /// Decode the rest of a geometry object whose `type` is already known.
    pub(crate) fn from_typed_object(
        type_: Type,
        object: &RawObject,
        options: &DecodeOptions,
    ) -> Result<Self, Error> {
        let member = match type_ {
            Type::GeometryCollection => "geometries",
            _ => "coordinates",
        };
        let raw = util::expect_property(object, member)?;
        log::trace!("decoding {} from '{}'", type_, member);
        Ok(Geometry::new(decode_coordinates(type_, raw, options)?))
    }

    /// Decode a geometry object from its source text.
    pub fn from_raw(raw: &RawValue, options: &DecodeOptions) -> Result<Self, Error> {
        let object = util::expect_object(raw)?;
        let type_ = util::expect_nested_type(&object, Kind::Geometry)?;
        Geometry::from_typed_object(type_, &object, options)
    }

    pub fn from_json_value(value: &JsonValue, options: &DecodeOptions) -> Result<Self, Error> {
        Geometry::from_raw(&util::to_raw(value)?, options)
    }
}

impl From<Value> for Geometry {
    fn from(value: Value) -> Self {
        Geometry::new(value)
    }
}

impl Serialize for Geometry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.type_name())?;
        match self.value {
            Value::GeometryCollection(ref geometries) => {
                map.serialize_entry("geometries", geometries)?
            }
            ref value => map.serialize_entry("coordinates", value)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D>(deserializer: D) -> Result<Geometry, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as SerdeError;

        let val = JsonValue::deserialize(deserializer)?;

        Geometry::from_json_value(&val, &DecodeOptions::default()).map_err(D::Error::custom)
    }
}
