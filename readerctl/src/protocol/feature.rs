// readerctl-rs/readerctl/src/protocol/feature.rs

use std::fmt;

use log::{debug, trace, warn};

use crate::constants::{FEATURE_CODE_LEN, FEATURE_RECORD_LEN};
use crate::types::{ControlCode, FeatureTag};

/// One entry of a GET_FEATURE_REQUEST response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub tag: FeatureTag,
    pub control_code: ControlCode,
}

impl Feature {
    pub fn new(tag: FeatureTag, control_code: ControlCode) -> Self {
        Self { tag, control_code }
    }
}

/// Reader feature list in response order.
///
/// Format: N x [Tag(1)] [Len(1) = 4] [ControlCode(4, big-endian)]
///
/// The wire format allows the same tag more than once; lookups return the
/// first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureTable {
    features: Vec<Feature>,
}

impl FeatureTable {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Decode a feature-list response.
    ///
    /// Never fails: a record whose length byte is not 4 is still read as a
    /// 4-byte control code, and a trailing partial record is dropped.
    pub fn decode(data: &[u8]) -> Self {
        let mut records = data.chunks_exact(FEATURE_RECORD_LEN);
        let mut features = Vec::with_capacity(data.len() / FEATURE_RECORD_LEN);

        for record in records.by_ref() {
            let tag = FeatureTag::new(record[0]);
            if record[1] != FEATURE_CODE_LEN {
                warn!(
                    "feature {} declares length {} (expected {}), reading 4 bytes anyway",
                    tag, record[1], FEATURE_CODE_LEN
                );
            }
            let control_code =
                ControlCode::from_be_bytes([record[2], record[3], record[4], record[5]]);
            trace!("feature {} -> control code {}", tag, control_code);
            features.push(Feature::new(tag, control_code));
        }

        let rest = records.remainder();
        if !rest.is_empty() {
            debug!("ignoring {} trailing bytes in feature list", rest.len());
        }

        Self { features }
    }

    /// Encode back into the wire format (length byte always 4).
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.features.len() * FEATURE_RECORD_LEN);
        for f in &self.features {
            buf.push(f.tag.as_u8());
            buf.push(FEATURE_CODE_LEN);
            buf.extend_from_slice(&f.control_code.to_be_bytes());
        }
        buf
    }

    /// Control code of the first entry carrying `tag`.
    pub fn find(&self, tag: FeatureTag) -> Option<ControlCode> {
        self.features
            .iter()
            .find(|f| f.tag == tag)
            .map(|f| f.control_code)
    }

    pub fn contains(&self, tag: FeatureTag) -> bool {
        self.find(tag).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn as_slice(&self) -> &[Feature] {
        &self.features
    }
}

impl<'a> IntoIterator for &'a FeatureTable {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

impl FromIterator<Feature> for FeatureTable {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feature in &self.features {
            writeln!(
                f,
                "Feature: {}\t ControlNumber: {}",
                feature.tag,
                feature.control_code.as_u32()
            )?;
        }
        Ok(())
    }
}
