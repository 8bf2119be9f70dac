#![doc = include_str!("../README.md")]

pub mod error;
pub mod link;
pub mod normalize;
pub mod number;
pub mod options;
pub mod policy;
pub mod target;

mod fields;

use std::io::Read;

pub use crate::error::{Error, Result};
pub use crate::link::{Link, Relation};
pub use crate::normalize::{normalize, normalize_policy, normalize_single};
pub use crate::options::Options;
pub use crate::policy::{PolicyType, ScalingPolicy};
pub use crate::target::{Target, TargetType};

/// Decode a listing response from text and normalize it.
pub fn normalize_str(s: &str, options: &Options) -> Result<Vec<ScalingPolicy>> {
    let document: serde_json::Value = serde_json::from_str(s)?;
    normalize(&document, options)
}

/// Decode a listing response from raw bytes and normalize it.
pub fn normalize_slice(bytes: &[u8], options: &Options) -> Result<Vec<ScalingPolicy>> {
    let document: serde_json::Value = serde_json::from_slice(bytes)?;
    normalize(&document, options)
}

/// Read a listing response to the end and normalize it. Invalid UTF-8 is a
/// malformed document, not an I/O failure.
pub fn normalize_reader<R: Read>(mut reader: R, options: &Options) -> Result<Vec<ScalingPolicy>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    normalize_slice(&bytes, options)
}
