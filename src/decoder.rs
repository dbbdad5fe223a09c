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

use crate::json::{JsonValue, RawValue};
use crate::{util, DecodeOptions, Error, Member};

/// Decodes GeoJSON text with a fixed set of [`DecodeOptions`].
///
/// A `Decoder` holds no state besides its options, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Decoder { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a single GeoJSON object.
    pub fn decode_member(&self, bytes: &[u8]) -> Result<Member, Error> {
        let raw = parse(bytes)?;
        self.decode_raw(raw).map_err(|e| {
            log::debug!("failed to decode GeoJSON member: {}", e);
            e
        })
    }

    /// Decode a JSON array of GeoJSON objects.
    ///
    /// Decoding stops at the first element that fails, and the error names
    /// its index. No partial result is returned.
    pub fn decode_members(&self, bytes: &[u8]) -> Result<Vec<Member>, Error> {
        let raw = parse(bytes)?;
        self.decode_raw_array(raw).map_err(|e| {
            log::debug!("failed to decode GeoJSON members: {}", e);
            e
        })
    }

    pub fn decode_raw(&self, raw: &RawValue) -> Result<Member, Error> {
        Member::from_raw(raw, &self.options)
    }

    pub fn decode_raw_array(&self, raw: &RawValue) -> Result<Vec<Member>, Error> {
        let elements = util::expect_array(raw)?;
        let mut members = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let member = self.decode_raw(element).map_err(|e| Error::Element {
                index,
                source: Box::new(e),
            })?;
            members.push(member);
        }
        Ok(members)
    }

    pub fn decode_value(&self, value: &JsonValue) -> Result<Member, Error> {
        Member::from_json_value(value, &self.options)
    }

    pub fn decode_values(&self, value: &JsonValue) -> Result<Vec<Member>, Error> {
        self.decode_raw_array(&util::to_raw(value)?)
    }
}

/// Parse only as far as needed to check the text is JSON; member values
/// keep pointing into `bytes`.
fn parse(bytes: &[u8]) -> Result<&RawValue, Error> {
    serde_json::from_slice(bytes).map_err(|e| {
        log::debug!("malformed GeoJSON input: {}", e);
        Error::from(e)
    })
}

/// Decode a single GeoJSON object with the default options.
pub fn decode_member(bytes: &[u8]) -> Result<Member, Error> {
    Decoder::default().decode_member(bytes)
}

/// Decode a JSON array of GeoJSON objects with the default options.
pub fn decode_members(bytes: &[u8]) -> Result<Vec<Member>, Error> {
    Decoder::default().decode_members(bytes)
}
