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

use crate::Kind;

/// Error when decoding a GeoJSON member
///
/// Every variant is permanent: decoding the same input again yields the same
/// error.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not valid JSON text; carries the parser's diagnostic.
    MalformedJson(String),
    /// A member required for the object's type is absent.
    ExpectedProperty(String),
    /// The `type` member is outside the recognized vocabulary.
    UnknownType(String),
    /// The coordinates do not have the nesting or arity the type requires.
    CoordinateShape { type_name: String, fragment: String },
    /// A Feature's geometry or a FeatureCollection's element has the wrong kind.
    InvalidNesting { expected: Kind, found: Kind },
    /// A property value cannot be represented as a string.
    PropertyType { key: String },
    PropertiesExpectedObjectOrNull,
    /// A line or ring has fewer positions than the strict policy allows.
    TooFewPoints {
        type_name: String,
        min: usize,
        found: usize,
    },
    /// A polygon ring whose first and last positions differ.
    RingNotClosed { type_name: String, fragment: String },
    ExpectedStringValue,
    ExpectedArrayValue,
    ExpectedObjectValue,
    /// A nested member failed to decode.
    InMember {
        type_name: String,
        member: String,
        source: Box<Error>,
    },
    /// An element of a batch failed to decode.
    Element { index: usize, source: Box<Error> },
}

impl Error {
    /// Follow `InMember` and `Element` wrappers down to the error that
    /// actually stopped decoding.
    pub fn root_cause(&self) -> &Error {
        let mut err = self;
        while let Error::InMember { ref source, .. } | Error::Element { ref source, .. } = *err {
            err = &**source;
        }
        err
    }

    pub(crate) fn in_member(self, type_name: &str, member: impl Into<String>) -> Self {
        Error::InMember {
            type_name: type_name.to_owned(),
            member: member.into(),
            source: Box::new(self),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MalformedJson(ref msg) => write!(f, "Encountered malformed JSON: {}", msg),
            Error::ExpectedProperty(ref prop_name) => {
                write!(f, "Expected GeoJSON property '{}'.", prop_name)
            }
            Error::UnknownType(ref type_name) => {
                write!(f, "Encountered unknown GeoJSON object type '{}'.", type_name)
            }
            Error::CoordinateShape {
                ref type_name,
                ref fragment,
            } => write!(
                f,
                "Coordinates do not match the shape of a '{}': {}",
                type_name, fragment,
            ),
            Error::InvalidNesting { expected, found } => write!(
                f,
                "Expected a member of kind '{}', found '{}'.",
                expected, found,
            ),
            Error::PropertyType { ref key } => {
                write!(f, "Property '{}' does not hold a string value.", key)
            }
            Error::PropertiesExpectedObjectOrNull => write!(
                f,
                "Encountered neither object type nor null type for \
                 'properties' object."
            ),
            Error::TooFewPoints {
                ref type_name,
                min,
                found,
            } => write!(
                f,
                "A '{}' needs at least {} positions, found {}.",
                type_name, min, found,
            ),
            Error::RingNotClosed {
                ref type_name,
                ref fragment,
            } => write!(f, "Ring of a '{}' is not closed: {}", type_name, fragment),
            Error::ExpectedStringValue => write!(f, "Expected a string value."),
            Error::ExpectedArrayValue => write!(f, "Expected an array."),
            Error::ExpectedObjectValue => write!(f, "Expected an object."),
            Error::InMember {
                ref type_name,
                ref member,
                ref source,
            } => write!(f, "In '{}' member of a '{}': {}", member, type_name, source),
            Error::Element { index, ref source } => {
                write!(f, "Element {} failed to decode: {}", index, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::InMember { ref source, .. } | Error::Element { ref source, .. } => {
                Some(&**source)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedJson(err.to_string())
    }
}
