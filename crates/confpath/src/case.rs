//! Case normalization for mapping keys.
//!
//! Key paths are matched case-insensitively, so every map reachable from a
//! root is expected to carry lower-case keys. Both variants recurse through
//! nested maps only: maps stored inside sequences are left untouched,
//! matching the resolver's single-level sequence support.

use crate::types::{Map, Node};

/// Lower-case all keys of `map` in place, recursively through nested maps.
///
/// Keys differing only in case collapse to one entry; which value survives
/// is undefined (last write wins in iteration order).
pub fn insensitivise(map: &mut Map) {
    let entries = std::mem::take(map);
    for (key, mut value) in entries {
        if let Node::Map(inner) = &mut value {
            insensitivise(inner);
        }
        map.insert(key.to_lowercase(), value);
    }
}

/// Return a copy of `node` with all map keys lower-cased, recursively.
///
/// The input is left untouched. Non-map nodes are cloned as-is; in
/// particular, maps held inside sequences keep their original key casing.
pub fn to_case_insensitive(node: &Node) -> Node {
    match node {
        Node::Map(map) => Node::Map(copy_insensitivised(map)),
        other => other.clone(),
    }
}

fn copy_insensitivised(map: &Map) -> Map {
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Node::Map(inner) => Node::Map(copy_insensitivised(inner)),
                other => other.clone(),
            };
            (key.to_lowercase(), value)
        })
        .collect()
}
