use indexmap::IndexMap;
use juery::{Value, traverse};
use serde_json::json;

fn json_object(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = IndexMap::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    Value::Object(map)
}

fn doc(v: serde_json::Value) -> Value {
    Value::from(v)
}

fn visited_paths(document: &Value) -> Vec<String> {
    traverse(Some(document)).map(|r| r.path.join("/")).collect()
}

#[test]
fn test_absent_document_yields_nothing() {
    assert_eq!(traverse(None).count(), 0);
}

#[test]
fn test_null_and_scalar_roots_yield_nothing() {
    assert_eq!(traverse(Some(&Value::Null)).count(), 0);
    assert_eq!(traverse(Some(&Value::Integer(7))).count(), 0);
    assert_eq!(traverse(Some(&Value::String("abc".into()))).count(), 0);
}

#[test]
fn test_empty_containers_yield_nothing() {
    assert_eq!(traverse(Some(&doc(json!({})))).count(), 0);
    assert_eq!(traverse(Some(&doc(json!([])))).count(), 0);
}

#[test]
fn test_flat_object_in_insertion_order() {
    let document = json_object(vec![
        ("zeta", Value::Integer(1)),
        ("alpha", Value::Integer(2)),
        ("mid", Value::Integer(3)),
    ]);

    assert_eq!(visited_paths(&document), ["zeta", "alpha", "mid"]);
}

#[test]
fn test_last_discovered_subtree_descended_first() {
    let document = doc(json!({"a": {"x": 1}, "b": {"y": 2}}));

    let records: Vec<_> = traverse(Some(&document)).collect();
    let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();

    assert_eq!(keys, ["a", "b", "y", "x"]);
    assert_eq!(records[2].path, ["b", "y"]);
    assert_eq!(records[3].path, ["a", "x"]);
}

#[test]
fn test_children_emitted_before_any_descent() {
    let document = doc(json!({
        "a": {"b": {"c": 1}, "d": 2},
        "e": [10, {"f": 3}]
    }));

    assert_eq!(
        visited_paths(&document),
        ["a", "e", "e/0", "e/1", "e/1/f", "a/b", "a/d", "a/b/c"]
    );
}

#[test]
fn test_array_indices_are_stringified_keys() {
    let document = doc(json!(["x", ["y"]]));

    let records: Vec<_> = traverse(Some(&document)).collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].key, "0");
    assert_eq!(records[1].key, "1");
    assert_eq!(records[2].path, ["1", "0"]);
    assert_eq!(records[2].value, &Value::String("y".into()));
}

#[test]
fn test_record_key_is_last_path_element() {
    let document = doc(json!({"a": {"b": [1, {"c": null}]}}));

    for record in traverse(Some(&document)) {
        assert_eq!(record.path.last(), Some(&record.key));
        assert_eq!(record.depth(), record.path.len());
    }
}

#[test]
fn test_record_value_borrows_document() {
    let document = doc(json!({"a": {"b": true}}));

    let first = traverse(Some(&document)).next().unwrap();
    assert_eq!(first.to_owned_value(), doc(json!({"b": true})));
    assert_eq!(first.to_string(), "a");
}

#[test]
fn test_null_values_are_emitted_but_not_descended() {
    let document = doc(json!({"a": null, "b": {"c": null}}));

    assert_eq!(visited_paths(&document), ["a", "b", "b/c"]);
}

#[test]
fn test_stopping_early_leaves_rest_unvisited() {
    let document = doc(json!({"a": {"x": 1}, "b": {"y": 2}}));

    let mut walk = traverse(Some(&document));
    assert_eq!(walk.next().map(|r| r.key), Some("a".to_string()));
    drop(walk);

    // A fresh walk starts over
    assert_eq!(visited_paths(&document), ["a", "b", "b/y", "a/x"]);
}

#[test]
fn test_exhausted_walk_stays_exhausted() {
    let document = doc(json!({"a": 1}));

    let mut walk = traverse(Some(&document));
    assert!(walk.next().is_some());
    assert!(walk.next().is_none());
    assert!(walk.next().is_none());
}

#[test]
fn test_repeated_walks_are_identical() {
    let document = doc(json!({"a": [1, {"b": 2}], "c": {"d": {"e": 3}}}));

    let first: Vec<_> = traverse(Some(&document)).collect();
    let second: Vec<_> = traverse(Some(&document)).collect();
    assert_eq!(first, second);
}
