use super::*;
use crate::case::insensitivise;
use crate::types::Scalar;

fn root_from(json: &str) -> Map {
    Node::from_json_str(json).unwrap().into_map().unwrap()
}

fn segments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| (*s).to_owned()).collect()
}

// ---- key_path ----

#[test]
fn test_key_path_lowercases_and_splits() {
    assert_eq!(key_path("Server.Port", "."), segments(&["server", "port"]));
    assert_eq!(key_path("A__B__0", "__"), segments(&["a", "b", "0"]));
}

#[test]
fn test_key_path_trailing_delimiter_yields_blank_segment() {
    assert_eq!(key_path("a__0__", "__"), segments(&["a", "0", ""]));
}

#[test]
fn test_key_path_empty_delimiter() {
    assert_eq!(key_path("a.b", ""), segments(&["a.b"]));
}

// ---- resolve_path ----

#[test]
fn test_resolve_simple_nested() {
    let mut root = root_from(r#"{"server": {"port": 8080}}"#);
    let value = resolve_path(&mut root, ".", "server.port");
    assert_eq!(value.and_then(Node::as_integer), Some(8080));
}

#[test]
fn test_resolve_is_case_insensitive() {
    let mut root = root_from(r#"{"server": {"port": 8080}}"#);
    let value = resolve_path(&mut root, ".", "SERVER.PORT");
    assert_eq!(value.and_then(Node::as_integer), Some(8080));
}

#[test]
fn test_resolve_after_normalization() {
    let mut root = Node::from_json_str(r#"{"Server": {"Port": 8080}}"#)
        .unwrap()
        .into_map()
        .unwrap();
    insensitivise(&mut root);

    let value = resolve_path(&mut root, ".", "Server.Port");
    assert_eq!(value.and_then(Node::as_integer), Some(8080));
}

#[test]
fn test_resolve_deep_array_path() {
    // a:{b:[{c:{d:[{e:1},{e:4}]}}]} with delimiter "__":
    // a__b__0__c__d__1__e addresses the 4.
    let mut root = root_from(r#"{"a": {"b": [{"c": {"d": [{"e": 1}, {"e": 4}]}}]}}"#);
    let value = resolve_path(&mut root, "__", "a__b__0__c__d__1__e");
    assert_eq!(value.and_then(Node::as_integer), Some(4));
}

#[test]
fn test_resolve_missing_key() {
    let mut root = root_from(r#"{"a": {"b": 1}}"#);
    assert_eq!(resolve_path(&mut root, ".", "a.missing"), None);
    assert_eq!(resolve_path(&mut root, ".", "missing.b"), None);
}

#[test]
fn test_resolve_scalar_intermediate_is_absent() {
    let mut root = root_from(r#"{"a": 1}"#);
    assert_eq!(resolve_path(&mut root, ".", "a.b"), None);
    // The read-only walk did not disturb the scalar.
    assert_eq!(root["a"].as_integer(), Some(1));
}

#[test]
fn test_resolve_trailing_delimiter_addresses_sequence_element() {
    let mut root = root_from(r#"{"a": [10, 20, 30]}"#);
    let value = resolve_path(&mut root, "__", "a__1__");
    assert_eq!(value.and_then(Node::as_integer), Some(20));
}

#[test]
fn test_resolve_trailing_delimiter_out_of_bounds() {
    let mut root = root_from(r#"{"a": [10]}"#);
    assert_eq!(resolve_path(&mut root, "__", "a__5__"), None);
}

#[test]
fn test_resolve_trailing_delimiter_without_sequence() {
    let mut root = root_from(r#"{"a": {"b": 1}}"#);
    assert_eq!(resolve_path(&mut root, "__", "a__b__"), None);
}

// ---- scaffold (create-on-miss) ----

#[test]
fn test_scaffold_creates_missing_maps() {
    let mut root = Map::new();
    let created = scaffold(&mut root, &segments(&["a", "b", "c"]));
    assert!(created.is_empty());

    let a = root["a"].as_map().unwrap();
    let b = a["b"].as_map().unwrap();
    assert!(b["c"].as_map().unwrap().is_empty());
}

#[test]
fn test_scaffold_then_read_finds_created_map() {
    let mut root = Map::new();
    let path = segments(&["outer", "inner"]);
    scaffold(&mut root, &path);

    let found = find_map(&root, &path).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_scaffold_replaces_non_map_values() {
    let mut root = root_from(r#"{"a": 5}"#);
    scaffold(&mut root, &segments(&["a", "b"]));

    let a = root["a"].as_map().unwrap();
    assert!(a["b"].as_map().unwrap().is_empty());
}

#[test]
fn test_scaffold_preserves_siblings() {
    let mut root = root_from(r#"{"a": {"keep": 1}}"#);
    scaffold(&mut root, &segments(&["a", "fresh"]));

    let a = root["a"].as_map().unwrap();
    assert_eq!(a["keep"].as_integer(), Some(1));
    assert!(a["fresh"].as_map().unwrap().is_empty());
}

#[test]
fn test_scaffold_empty_path_returns_root() {
    let mut root = root_from(r#"{"a": 1}"#);
    let reached = scaffold(&mut root, &[]);
    assert_eq!(reached.len(), 1);
}

// ---- find_map (fail-on-miss) ----

#[test]
fn test_find_map_walks_through_sequence_of_maps() {
    let root = root_from(r#"{"a": [{"b": {"c": 1}}]}"#);
    let found = find_map(&root, &segments(&["a", "0", "b"])).unwrap();
    assert_eq!(found["c"].as_integer(), Some(1));
}

#[test]
fn test_find_map_non_integer_index() {
    let root = root_from(r#"{"a": [{"b": 1}]}"#);
    assert_eq!(find_map(&root, &segments(&["a", "x"])), None);
}

#[test]
fn test_find_map_index_out_of_bounds() {
    let root = root_from(r#"{"a": [{"b": 1}]}"#);
    assert_eq!(find_map(&root, &segments(&["a", "3"])), None);
}

#[test]
fn test_find_map_sequence_of_sequences_fails_closed() {
    let root = root_from(r#"{"a": [[{"b": 1}]]}"#);
    assert_eq!(find_map(&root, &segments(&["a", "0"])), None);
}

#[test]
fn test_find_map_path_ending_in_sequence_mode() {
    let root = root_from(r#"{"a": [{"b": 1}]}"#);
    assert_eq!(find_map(&root, &segments(&["a"])), None);
}

#[test]
fn test_find_map_numeric_key_outside_sequence_is_a_map_key() {
    // "0" addresses a map key here, not an index.
    let root = root_from(r#"{"0": {"b": 1}}"#);
    let found = find_map(&root, &segments(&["0"])).unwrap();
    assert_eq!(found["b"].as_integer(), Some(1));
}

// ---- find_sequence (sequence-aware) ----

#[test]
fn test_find_sequence_terminal_scalar() {
    let mut root = root_from(r#"{"a": [10, 20, 30]}"#);
    let (sequence, index) = find_sequence(&mut root, &segments(&["a", "2"])).unwrap();
    assert_eq!(sequence.len(), 3);
    assert_eq!(sequence.get(index).and_then(Node::as_integer), Some(30));
}

#[test]
fn test_find_sequence_scalar_before_last_segment() {
    let mut root = root_from(r#"{"a": [10, 20]}"#);
    assert_eq!(find_sequence(&mut root, &segments(&["a", "0", "x"])), None);
}

#[test]
fn test_find_sequence_no_sequence_on_path() {
    let mut root = root_from(r#"{"a": {"b": {"c": 1}}}"#);
    assert_eq!(find_sequence(&mut root, &segments(&["a", "b"])), None);
}

#[test]
fn test_find_sequence_absent_key_is_not_created() {
    let mut root = Map::new();
    assert_eq!(find_sequence(&mut root, &segments(&["a", "0"])), None);
    assert!(root.is_empty());
}

#[test]
fn test_find_sequence_replaces_scalar_intermediate() {
    let mut root = root_from(r#"{"a": 1}"#);
    assert_eq!(find_sequence(&mut root, &segments(&["a", "b"])), None);
    // The discovery pass scaffolds: the scalar was replaced with an empty
    // map even though the lookup came up empty.
    assert!(root["a"].as_map().unwrap().is_empty());
}

#[test]
fn test_find_sequence_non_integer_index() {
    let mut root = root_from(r#"{"a": [10]}"#);
    assert_eq!(find_sequence(&mut root, &segments(&["a", "first"])), None);
}

#[test]
fn test_find_sequence_deep() {
    let mut root = root_from(r#"{"a": {"b": [{"c": [7, 8]}]}}"#);
    let (sequence, index) = find_sequence(&mut root, &segments(&["a", "b", "0", "c", "1"])).unwrap();
    assert_eq!(sequence.get(index).and_then(Node::as_integer), Some(8));
}

// ---- determinism ----

#[test]
fn test_resolution_is_deterministic() {
    let json = r#"{"a": {"b": [{"c": 1}, {"c": 2}]}}"#;
    let mut first = root_from(json);
    let mut second = root_from(json);

    let a = resolve_path(&mut first, "__", "a__b__1__c").cloned();
    let b = resolve_path(&mut second, "__", "a__b__1__c").cloned();
    assert_eq!(a, b);
    assert_eq!(a, Some(Node::Scalar(Scalar::Integer(2))));
}
