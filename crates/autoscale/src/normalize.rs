//! Policy normalizer: untyped response tree in, typed records out.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::fields::Fields;
use crate::link::parse_links;
use crate::number::truncate_cooldown;
use crate::options::Options;
use crate::policy::{PolicyType, ScalingPolicy, UnknownPolicyType};
use crate::target::resolve_target;

const POLICIES: &str = "policies";
const POLICY: &str = "policy";

/// Normalize a listing response, `{"policies": [...]}`.
///
/// Output order follows input order. The first failing entry aborts the
/// whole call; no partial list is returned.
pub fn normalize(document: &Value, options: &Options) -> Result<Vec<ScalingPolicy>> {
    let entries = match document.get(POLICIES) {
        Some(Value::Array(entries)) => entries,
        _ => return Err(Error::MissingEnvelope { key: POLICIES }),
    };

    let policies = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(map) => normalize_policy(index, map, options),
            _ => Err(Error::InvalidField {
                index,
                field: POLICIES.to_string(),
                expected: "a list of mappings",
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = policies.len(), "normalized scaling policies");
    Ok(policies)
}

/// Normalize a fetch-one response, `{"policy": {...}}`.
pub fn normalize_single(document: &Value, options: &Options) -> Result<ScalingPolicy> {
    match document.get(POLICY) {
        Some(Value::Object(map)) => normalize_policy(0, map, options),
        _ => Err(Error::MissingEnvelope { key: POLICY }),
    }
}

/// Normalize one policy map. `index` is reported in errors.
pub fn normalize_policy(
    index: usize,
    map: &Map<String, Value>,
    options: &Options,
) -> Result<ScalingPolicy> {
    let fields = Fields::new(index, map);

    let target = resolve_target(fields, options)?;

    let raw_type = fields.string("type")?;
    let policy_type = raw_type
        .parse::<PolicyType>()
        .map_err(|UnknownPolicyType(value)| Error::UnknownPolicyType { index, value })?;

    let cooldown = truncate_cooldown(fields.number("cooldown")?);
    let links = parse_links(fields, options)?;
    let args = parse_args(fields)?;

    let policy = ScalingPolicy::new(
        fields.string("name")?.to_string(),
        policy_type,
        cooldown,
        target.value,
        target.target_type,
        args,
        links,
        fields.string("id")?.to_string(),
    );
    trace!(
        index,
        id = policy.id(),
        target_type = %policy.target_type(),
        "normalized policy"
    );
    Ok(policy)
}

fn parse_args(fields: Fields<'_>) -> Result<BTreeMap<String, String>> {
    let Some(map) = fields.opt_object("args")? else {
        return Ok(BTreeMap::new());
    };
    map.iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key.clone(), s.clone())),
            _ => Err(fields.invalid(&format!("args.{key}"), "a string")),
        })
        .collect()
}
