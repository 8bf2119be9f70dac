use autoscale::{Options, normalize};
use serde_json::json;

fn doc(extra: serde_json::Value) -> serde_json::Value {
    let mut p = json!({
        "name": "n",
        "type": "cloud_monitoring",
        "cooldown": 5,
        "desired_capacity": 4,
        "id": "i"
    });
    if let (Some(map), Some(extra)) = (p.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            map.insert(k.clone(), v.clone());
        }
    }
    json!({"policies": [p]})
}

#[test]
fn absent_args_and_links_are_empty() {
    let policies = normalize(&doc(json!({})), &Options::default()).unwrap();
    assert!(policies[0].args().is_empty());
    assert!(policies[0].links().is_empty());
}

#[test]
fn null_args_and_links_are_empty() {
    let policies = normalize(&doc(json!({"args": null, "links": null})), &Options::default()).unwrap();
    assert!(policies[0].args().is_empty());
    assert!(policies[0].links().is_empty());
}

#[test]
fn unrelated_keys_are_ignored() {
    let policies = normalize(
        &doc(json!({"metadata": {"owner": "ops"}, "extra": [1, 2]})),
        &Options::default(),
    )
    .unwrap();
    assert_eq!(policies[0].target(), "4");
    assert_eq!(policies[0].policy_type().as_str(), "cloud_monitoring");
}
