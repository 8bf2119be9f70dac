use autoscale::{Error, Options, TargetType, normalize_str};

const TWO_TARGETS: &str = r#"{"policies": [{
    "name": "n", "type": "webhook", "cooldown": 1,
    "change_percent": 12.5, "change": 3,
    "links": [], "id": "i"
}]}"#;

#[test]
fn default_mode_takes_first_key_in_document_order() {
    let policies = normalize_str(TWO_TARGETS, &Options::default()).unwrap();
    assert_eq!(policies[0].target_type(), TargetType::ChangePercent);
    assert_eq!(policies[0].target(), "12.5");

    let swapped = TWO_TARGETS.replace(
        r#""change_percent": 12.5, "change": 3,"#,
        r#""change": 3, "change_percent": 12.5,"#,
    );
    let policies = normalize_str(&swapped, &Options::default()).unwrap();
    assert_eq!(policies[0].target_type(), TargetType::Change);
    assert_eq!(policies[0].target(), "3");
}

#[test]
fn null_target_key_falls_through_to_next_key() {
    let body = TWO_TARGETS.replace(r#""change_percent": 12.5"#, r#""change_percent": null"#);
    let policies = normalize_str(&body, &Options::strict()).unwrap();
    assert_eq!(policies[0].target_type(), TargetType::Change);
    assert_eq!(policies[0].target(), "3");
}

#[test]
fn strict_mode_rejects_several_target_keys() {
    let err = normalize_str(TWO_TARGETS, &Options::strict()).unwrap_err();
    match err {
        Error::AmbiguousTargetType { index, keys } => {
            assert_eq!(index, 0);
            assert_eq!(keys, vec!["change_percent".to_string(), "change".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_accepts_single_target_key() {
    let body = TWO_TARGETS.replace(r#""change_percent": 12.5, "#, "");
    let policies = normalize_str(&body, &Options::strict()).unwrap();
    assert_eq!(policies[0].target_type(), TargetType::Change);
}

#[test]
fn every_target_key_parses() {
    assert_eq!(
        TargetType::ALL,
        [TargetType::DesiredCapacity, TargetType::Change, TargetType::ChangePercent]
    );
    for t in TargetType::ALL {
        assert_eq!(t.as_str().parse::<TargetType>().unwrap(), t);
    }
    assert!("Change".parse::<TargetType>().is_err());
}
