//! Create-on-miss traversal.

use crate::types::{Map, Node};

/// Walk `path` against `map`, creating intermediate maps as needed, and
/// return the map reached after consuming every segment.
///
/// A missing segment is filled with a new empty map. A segment holding a
/// non-map value has that value replaced with a new empty map: the caller
/// intends to write below this point, so whatever scalar or sequence was
/// there is discarded. Sibling keys are never touched.
pub fn scaffold<'a>(map: &'a mut Map, path: &[String]) -> &'a mut Map {
    let mut current = map;
    for segment in path {
        let slot = current
            .entry(segment.clone())
            .or_insert_with(|| Node::Map(Map::new()));
        if !slot.is_map() {
            *slot = Node::Map(Map::new());
        }
        let Node::Map(next) = slot else { unreachable!() };
        current = next;
    }
    current
}
