use autoscale::{Options, normalize_str};

fn target_of(raw: &str) -> String {
    let body = format!(
        r#"{{"policies": [{{"name": "n", "type": "webhook", "cooldown": 1, "change": {raw}, "links": [], "id": "i"}}]}}"#
    );
    let policies = normalize_str(&body, &Options::default()).unwrap();
    policies[0].target().to_string()
}

#[test]
fn integral_floats_drop_fraction() {
    assert_eq!(target_of("5.0"), "5");
    assert_eq!(target_of("0.0"), "0");
    assert_eq!(target_of("-0.0"), "0");
    assert_eq!(target_of("-3.0"), "-3");
    assert_eq!(target_of("1e2"), "100");
}

#[test]
fn integer_literals_stay_integers() {
    assert_eq!(target_of("5"), "5");
    assert_eq!(target_of("-12"), "-12");
    assert_eq!(target_of("18446744073709551615"), "18446744073709551615");
}

#[test]
fn fractional_values_use_shortest_text() {
    assert_eq!(target_of("2.5"), "2.5");
    assert_eq!(target_of("0.1"), "0.1");
    assert_eq!(target_of("-12.75"), "-12.75");
}

#[test]
fn no_exponent_notation_in_output() {
    assert_eq!(target_of("1e-7"), "0.0000001");
    assert_eq!(target_of("1e21"), "1000000000000000000000");
}

#[test]
fn helpers_agree_with_normalizer() {
    use autoscale::number::{format_target_f64, is_mathematical_integer};

    assert!(is_mathematical_integer(5.0));
    assert!(is_mathematical_integer(-0.0));
    assert!(!is_mathematical_integer(2.5));
    assert!(!is_mathematical_integer(f64::NAN));
    assert!(!is_mathematical_integer(f64::INFINITY));
    assert_eq!(format_target_f64(5.0), "5");
    assert_eq!(format_target_f64(2.5), "2.5");
}

#[test]
fn cooldown_truncates_toward_zero() {
    use autoscale::number::truncate_cooldown;

    let n = |v: f64| serde_json::Number::from_f64(v).unwrap();
    assert_eq!(truncate_cooldown(&n(59.9)), 59);
    assert_eq!(truncate_cooldown(&n(-1.5)), -1);
    assert_eq!(truncate_cooldown(&serde_json::Number::from(30)), 30);
    assert_eq!(truncate_cooldown(&serde_json::Number::from(u64::MAX)), i64::MAX);
}
