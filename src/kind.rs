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

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The coarse kind of a GeoJSON member.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    Geometry,
    Feature,
    FeatureCollection,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Kind::Geometry => "Geometry",
            Kind::Feature => "Feature",
            Kind::FeatureCollection => "FeatureCollection",
        })
    }
}

/// Value of the `type` member
///
/// [GeoJSON Format Specification § 1.4](https://tools.ietf.org/html/rfc7946#section-1.4)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Type {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
}

impl Type {
    pub fn as_str(self) -> &'static str {
        match self {
            Type::Point => "Point",
            Type::MultiPoint => "MultiPoint",
            Type::LineString => "LineString",
            Type::MultiLineString => "MultiLineString",
            Type::Polygon => "Polygon",
            Type::MultiPolygon => "MultiPolygon",
            Type::GeometryCollection => "GeometryCollection",
            Type::Feature => "Feature",
            Type::FeatureCollection => "FeatureCollection",
        }
    }

    pub fn kind(self) -> Kind {
        match self {
            Type::Feature => Kind::Feature,
            Type::FeatureCollection => Kind::FeatureCollection,
            _ => Kind::Geometry,
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    /// Exact, case-sensitive lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(Type::Point),
            "MultiPoint" => Ok(Type::MultiPoint),
            "LineString" => Ok(Type::LineString),
            "MultiLineString" => Ok(Type::MultiLineString),
            "Polygon" => Ok(Type::Polygon),
            "MultiPolygon" => Ok(Type::MultiPolygon),
            "GeometryCollection" => Ok(Type::GeometryCollection),
            "Feature" => Ok(Type::Feature),
            "FeatureCollection" => Ok(Type::FeatureCollection),
            _ => Err(Error::UnknownType(s.to_owned())),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a `type` string onto its [`Type`].
///
/// The vocabulary is matched exactly; `"point"` is not a `Point`.
pub fn classify(type_name: &str) -> Result<Type, Error> {
    type_name.parse()
}
