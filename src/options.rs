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

/// How non-string property values are treated.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PropertyPolicy {
    /// Any non-string value is an error.
    #[default]
    Strict,
    /// Numbers and booleans are kept as their JSON text. `null`, arrays and
    /// objects are still errors.
    Stringify,
}

/// Knobs for [`Decoder`](crate::Decoder).
///
/// The defaults decode leniently: any number of positions per line, rings
/// need not be closed, and property values must be strings.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Require at least 2 positions per LineString and 4 per Polygon ring.
    pub strict_positions: bool,
    /// Require the first and last position of each Polygon ring to be equal.
    pub closed_rings: bool,
    pub properties: PropertyPolicy,
}

impl DecodeOptions {
    /// Both geometry checks on, strict properties.
    pub fn strict() -> Self {
        DecodeOptions {
            strict_positions: true,
            closed_rings: true,
            properties: PropertyPolicy::Strict,
        }
    }

    pub fn strict_positions(mut self, yes: bool) -> Self {
        self.strict_positions = yes;
        self
    }

    pub fn closed_rings(mut self, yes: bool) -> Self {
        self.closed_rings = yes;
        self
    }

    pub fn properties(mut self, policy: PropertyPolicy) -> Self {
        self.properties = policy;
        self
    }
}
