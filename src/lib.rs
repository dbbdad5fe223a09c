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

//! Decode GeoJSON text into strongly typed members.
//!
//! The `type` member of every object selects how the rest of the object is
//! read: geometries carry kind-specific `coordinates`, features own exactly
//! one nested geometry, and feature collections own a list of features.
//!
//! ```
//! use geojson_member::{decode_member, Member, Value};
//!
//! let member = decode_member(br#"{"type":"Point","coordinates":[1.23,4.56]}"#).unwrap();
//! match member {
//!     Member::Geometry(g) => assert_eq!(g.value, Value::Point([1.23, 4.56])),
//!     _ => unreachable!(),
//! }
//! ```

/// A single position: longitude then latitude.
pub type Point = [f64; 2];

/// An ordered run of positions.
pub type LineString = Vec<Point>;

/// A list of linear rings, the first being the exterior boundary.
pub type Polygon = Vec<LineString>;

mod json {
    pub use serde::{Deserialize, Deserializer, Serialize, Serializer};
    pub use serde_json::value::RawValue;
    pub use serde_json::{Map, Value as JsonValue};

    pub type JsonObject = Map<String, JsonValue>;
}

pub use crate::json::{JsonObject, JsonValue, RawValue};

mod error;
pub use crate::error::Error;

mod kind;
pub use crate::kind::{classify, Kind, Type};

mod options;
pub use crate::options::{DecodeOptions, PropertyPolicy};

mod geometry;
pub use crate::geometry::{decode_coordinates, Geometry, Value};

mod member;
pub use crate::member::{Feature, FeatureCollection, Member, Properties};

mod decoder;
pub use crate::decoder::{decode_member, decode_members, Decoder};

mod to_geojson;

mod util;
