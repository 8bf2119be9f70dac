use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("document has no \"{key}\" envelope")]
    MissingEnvelope { key: &'static str },

    #[error("policy {index}: missing field \"{field}\"")]
    MissingField { index: usize, field: String },

    #[error("policy {index}: field \"{field}\" is not {expected}")]
    InvalidField {
        index: usize,
        field: String,
        expected: &'static str,
    },

    #[error("policy {index}: no target type key (expected one of desired_capacity, change, change_percent)")]
    MissingTargetType { index: usize },

    #[error("policy {index}: more than one target type key: {}", .keys.join(", "))]
    AmbiguousTargetType { index: usize, keys: Vec<String> },

    #[error("policy {index}: unknown policy type {value:?}")]
    UnknownPolicyType { index: usize, value: String },

    #[error("policy {index}: links[{link}]: unknown relation {value:?}")]
    UnknownRelation {
        index: usize,
        link: usize,
        value: String,
    },

    #[error("policy {index}: links[{link}]: malformed href {href:?}: {source}")]
    MalformedUri {
        index: usize,
        link: usize,
        href: String,
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    /// Position of the offending entry under `"policies"`, if the failure is
    /// tied to one.
    pub fn policy_index(&self) -> Option<usize> {
        match self {
            Error::Io(_) | Error::MalformedDocument(_) | Error::MissingEnvelope { .. } => None,
            Error::MissingField { index, .. }
            | Error::InvalidField { index, .. }
            | Error::MissingTargetType { index }
            | Error::AmbiguousTargetType { index, .. }
            | Error::UnknownPolicyType { index, .. }
            | Error::UnknownRelation { index, .. }
            | Error::MalformedUri { index, .. } => Some(*index),
        }
    }

    /// Name of the field that could not be normalized.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Io(_) | Error::MalformedDocument(_) => None,
            Error::MissingEnvelope { key } => Some(*key),
            Error::MissingField { field, .. } | Error::InvalidField { field, .. } => {
                Some(field.as_str())
            }
            Error::MissingTargetType { .. } | Error::AmbiguousTargetType { .. } => None,
            Error::UnknownPolicyType { .. } => Some("type"),
            Error::UnknownRelation { .. } => Some("rel"),
            Error::MalformedUri { .. } => Some("href"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
