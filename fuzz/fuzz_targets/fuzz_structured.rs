#![no_main]
use arbitrary::Arbitrary;
use autoscale::{Options, TargetType, normalize};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Number, Value, json};

const MAX_POLICIES: usize = 8;
const MAX_LINKS: usize = 4;
const TYPES: [&str; 4] = ["webhook", "schedule", "cloud_monitoring", "bogus"];
const RELS: [&str; 4] = ["self", "bookmark", "next", "sideways"];
const HREFS: [&str; 3] = ["http://x/1", "https://autoscale.example.com/v1.0/p/", "not a uri"];

#[derive(Arbitrary, Debug)]
struct FuzzPolicy {
    target_mask: u8,
    target_value: f64,
    target_int: Option<i64>,
    cooldown: f64,
    type_choice: u8,
    links: Vec<(u8, u8)>,
    args: Vec<(String, String)>,
    name: String,
}

impl FuzzPolicy {
    fn to_json_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".into(), Value::String(self.name.clone()));
        map.insert(
            "type".into(),
            json!(TYPES[self.type_choice as usize % TYPES.len()]),
        );
        map.insert("cooldown".into(), number(self.cooldown));
        for (bit, key) in ["desired_capacity", "change", "change_percent"].iter().enumerate() {
            if self.target_mask & (1 << bit) != 0 {
                let value = match self.target_int {
                    Some(i) => Value::Number(Number::from(i)),
                    None => number(self.target_value),
                };
                map.insert((*key).into(), value);
            }
        }
        let links: Vec<Value> = self
            .links
            .iter()
            .take(MAX_LINKS)
            .map(|(h, r)| {
                json!({
                    "href": HREFS[*h as usize % HREFS.len()],
                    "rel": RELS[*r as usize % RELS.len()],
                })
            })
            .collect();
        map.insert("links".into(), Value::Array(links));
        let args: Map<String, Value> = self
            .args
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        map.insert("args".into(), Value::Object(args));
        map.insert("id".into(), Value::String(self.name.clone()));
        Value::Object(map)
    }
}

fn number(v: f64) -> Value {
    Number::from_f64(v).map(Value::Number).unwrap_or(json!(0))
}

fuzz_target!(|policies: Vec<FuzzPolicy>| {
    let entries: Vec<Value> = policies
        .iter()
        .take(MAX_POLICIES)
        .map(FuzzPolicy::to_json_value)
        .collect();
    let count = entries.len();
    let document = json!({ "policies": entries });

    for options in [Options::default(), Options::strict()] {
        let first = normalize(&document, &options);
        let second = normalize(&document, &options);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a, b, "normalization is not idempotent");
                assert_eq!(a.len(), count);
                for (policy, entry) in a.iter().zip(&document["policies"].as_array().unwrap()[..]) {
                    let key = policy.target_type().as_str();
                    let wire = entry[key].as_f64().unwrap();
                    let text: f64 = policy.target().parse().unwrap();
                    assert_eq!(text, wire, "target text {} lost value", policy.target());
                    assert!(!policy.target().contains(['e', 'E']));
                    assert!(TargetType::ALL.contains(&policy.target_type()));
                }
            }
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("normalization outcome changed between identical calls"),
        }
    }
});
