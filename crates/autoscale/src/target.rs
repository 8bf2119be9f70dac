//! Discriminator resolution: which target type key did the service send?

use core::fmt;
use core::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::fields::Fields;
use crate::number::target_value_text;
use crate::options::Options;

/// The scaling dimension a policy adjusts. Its wire key doubles as the
/// variant tag of the policy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Absolute instance count.
    DesiredCapacity,
    /// Relative change in instances.
    Change,
    /// Relative change as a percentage of current capacity.
    ChangePercent,
}

impl TargetType {
    pub const ALL: [TargetType; 3] = [
        TargetType::DesiredCapacity,
        TargetType::Change,
        TargetType::ChangePercent,
    ];

    /// Case-sensitive exact match against the wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "desired_capacity" => Some(TargetType::DesiredCapacity),
            "change" => Some(TargetType::Change),
            "change_percent" => Some(TargetType::ChangePercent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::DesiredCapacity => "desired_capacity",
            TargetType::Change => "change",
            TargetType::ChangePercent => "change_percent",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTargetType(pub String);

impl fmt::Display for UnknownTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown target type {:?}", self.0)
    }
}

impl core::error::Error for UnknownTargetType {}

impl FromStr for TargetType {
    type Err = UnknownTargetType;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        TargetType::from_key(s).ok_or_else(|| UnknownTargetType(s.to_string()))
    }
}

/// A resolved discriminator and its reconstructed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub target_type: TargetType,
    pub value: String,
}

pub(crate) fn resolve_target(fields: Fields<'_>, options: &Options) -> Result<Target> {
    // Document order, kept by serde_json's preserve_order. A null value
    // counts as absent, same as every other field.
    let found: Vec<TargetType> = fields
        .keys()
        .filter(|key| fields.get(key).is_some())
        .filter_map(|key| TargetType::from_key(key))
        .collect();

    let target_type = match found.as_slice() {
        [] => {
            return Err(Error::MissingTargetType {
                index: fields.index(),
            });
        }
        [only] => *only,
        [..] if options.strict => {
            return Err(Error::AmbiguousTargetType {
                index: fields.index(),
                keys: found.iter().map(|t| t.as_str().to_string()).collect(),
            });
        }
        [first, ..] => {
            let chosen = *first;
            warn!(
                policy = fields.index(),
                chosen = %chosen,
                candidates = found.len(),
                "policy carries several target type keys"
            );
            chosen
        }
    };

    let number = fields.number(target_type.as_str())?;
    Ok(Target {
        target_type,
        value: target_value_text(number),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn resolve(doc: serde_json::Value, options: &Options) -> Result<Target> {
        let map = doc.as_object().cloned().unwrap_or_default();
        resolve_target(Fields::new(0, &map), options)
    }

    #[test]
    fn key_lookup_is_case_sensitive() {
        assert_eq!(TargetType::from_key("change"), Some(TargetType::Change));
        assert_eq!(TargetType::from_key("Change"), None);
        assert_eq!(TargetType::from_key("desiredCapacity"), None);
    }

    #[test]
    fn first_key_in_document_order_wins() {
        let t = resolve(
            json!({"change_percent": 10, "desired_capacity": 3}),
            &Options::default(),
        )
        .unwrap();
        assert_eq!(t.target_type, TargetType::ChangePercent);
        assert_eq!(t.value, "10");
    }

    #[test]
    fn null_target_key_is_skipped() {
        let t = resolve(
            json!({"desired_capacity": null, "change": 3}),
            &Options::strict(),
        )
        .unwrap();
        assert_eq!(t.target_type, TargetType::Change);
        assert_eq!(t.value, "3");

        let err = resolve(json!({"change": null}), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::MissingTargetType { index: 0 }));
    }

    #[test]
    fn strict_reports_keys_in_document_order() {
        let err = resolve(
            json!({"change_percent": 10, "change": 1}),
            &Options::strict(),
        )
        .unwrap_err();
        match err {
            Error::AmbiguousTargetType { index, keys } => {
                assert_eq!(index, 0);
                assert_eq!(keys, vec!["change_percent", "change"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn string_target_value_is_rejected() {
        let err = resolve(json!({"change": "5"}), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "change"));
    }
}
