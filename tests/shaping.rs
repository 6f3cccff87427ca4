//! Integration tests for filter selection and flattening.

use serde_json::{Map, Value};

use hookrelay::shape::{select, FilterKeySet, Flattener};

fn parse(raw: &str) -> Map<String, Value> {
    match serde_json::from_str(raw).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn shape(raw: &str, keys: &[&str]) -> String {
    let selected = select(parse(raw), &FilterKeySet::new(keys));
    Flattener::default().flatten(&selected).unwrap()
}

#[test]
fn scalar_and_nesting() {
    assert_eq!(shape(r#"{"a": 1}"#, &[]), "a: 1\n");
    assert_eq!(shape(r#"{"a": {"b": 2}}"#, &[]), "a: \n  b: 2\n");
}

#[test]
fn array_elements_follow_array_order() {
    assert_eq!(
        shape(r#"{"items":[{"id":1},{"id":2}]}"#, &[]),
        "items: \n  items: \n    id: 1\n  items: \n    id: 2\n"
    );
}

#[test]
fn filter_selects_in_key_order() {
    assert_eq!(shape(r#"{"x":1,"y":2,"z":3}"#, &["z", "x"]), "z: 3\nx: 1\n");
}

#[test]
fn filter_on_missing_key_is_silent() {
    assert_eq!(shape(r#"{"x":1}"#, &["nope", "x", "also_nope"]), "x: 1\n");
    assert_eq!(shape(r#"{"x":1}"#, &["nope"]), "");
}

#[test]
fn empty_filter_flattens_everything() {
    let text = shape(r#"{"x":1,"y":{"k":"v"},"z":[1]}"#, &[]);
    assert_eq!(text, "x: 1\ny: \n  k: v\nz: \n  z: 1\n");
}

#[test]
fn selected_keys_keep_all_descendants() {
    let text = shape(
        r#"{"order":{"id":"A1","lines":[{"sku":"x","qty":2}]},"secret":"hide"}"#,
        &["order"],
    );
    assert_eq!(
        text,
        "order: \n  id: A1\n  lines: \n    lines: \n      sku: x\n      qty: 2\n"
    );
}

#[test]
fn flattening_is_repeatable() {
    let raw = r#"{"q":1,"b":{"z":[1,2,{"m":null}],"a":"s"},"c":false}"#;
    let doc = parse(raw);
    let flattener = Flattener::default();
    let first = flattener.flatten(&doc).unwrap();
    let second = flattener.flatten(&doc).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, shape(raw, &[]));
    assert!(first.starts_with("q: 1\nb: \n  z: "));
}

#[test]
fn unicode_keys_and_values_pass_through() {
    assert_eq!(shape(r#"{"訊息":"你好","emoji":"🚀"}"#, &[]), "訊息: 你好\nemoji: 🚀\n");
}
