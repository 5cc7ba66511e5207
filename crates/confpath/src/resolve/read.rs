//! Fail-on-miss traversal.

use crate::types::{Map, Node};

/// Walk `path` against `root` without mutating anything, returning the map
/// reached after consuming every segment.
///
/// In map position the segment is a key: absent keys and scalar values stop
/// the walk with `None`. A sequence value switches the walk into sequence
/// mode for the next segment, which must then parse as an in-bounds base-10
/// index whose element is a map. One level of sequence-of-maps is
/// supported, deeper sequence-of-sequence nesting fails closed. A path that
/// ends while still in sequence mode (no index segment followed) is also
/// absence.
pub fn find_map<'a>(root: &'a Map, path: &[String]) -> Option<&'a Map> {
    let mut current = root;
    let mut in_sequence: Option<&'a [Node]> = None;

    for segment in path {
        if let Some(sequence) = in_sequence.take() {
            let index: usize = segment.parse().ok()?;
            match sequence.get(index)? {
                Node::Map(next) => current = next,
                // Sequences of sequences are unsupported; scalars cannot be
                // descended into.
                _ => return None,
            }
        } else {
            match current.get(segment)? {
                Node::Map(next) => current = next,
                Node::Sequence(items) => in_sequence = Some(items),
                Node::Scalar(_) => return None,
            }
        }
    }

    if in_sequence.is_some() {
        return None;
    }
    Some(current)
}
