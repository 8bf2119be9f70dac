use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::link::Link;
use crate::target::TargetType;

/// What triggers a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Webhook,
    Schedule,
    CloudMonitoring,
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Webhook => "webhook",
            PolicyType::Schedule => "schedule",
            PolicyType::CloudMonitoring => "cloud_monitoring",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicyType(pub String);

impl fmt::Display for UnknownPolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy type {:?}", self.0)
    }
}

impl core::error::Error for UnknownPolicyType {}

impl FromStr for PolicyType {
    type Err = UnknownPolicyType;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "webhook" => Ok(PolicyType::Webhook),
            "schedule" => Ok(PolicyType::Schedule),
            "cloud_monitoring" => Ok(PolicyType::CloudMonitoring),
            other => Err(UnknownPolicyType(other.to_string())),
        }
    }
}

/// One normalized scaling policy.
///
/// Built once per entry of a policy response and never mutated afterwards;
/// fields are reachable through accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalingPolicy {
    name: String,
    #[serde(rename = "type")]
    policy_type: PolicyType,
    cooldown: i64,
    target: String,
    target_type: TargetType,
    args: BTreeMap<String, String>,
    links: Vec<Link>,
    id: String,
}

impl ScalingPolicy {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        policy_type: PolicyType,
        cooldown: i64,
        target: String,
        target_type: TargetType,
        args: BTreeMap<String, String>,
        links: Vec<Link>,
        id: String,
    ) -> Self {
        Self {
            name,
            policy_type,
            cooldown,
            target,
            target_type,
            args,
            links,
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy_type(&self) -> PolicyType {
        self.policy_type
    }

    /// Seconds; truncated from the wire value, sign not checked.
    pub fn cooldown(&self) -> i64 {
        self.cooldown
    }

    /// Target value as text, `"5"` rather than `"5.0"` for integral values.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn args(&self) -> &BTreeMap<String, String> {
        &self.args
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
