//! Sequence-aware traversal for trailing-delimiter keys.

use crate::types::{Map, Node};

/// A walk position: either inside a map or inside a sequence.
enum Cursor<'a> {
    Map(&'a mut Map),
    Seq(&'a mut Vec<Node>),
}

/// Read-only twin of [`Cursor`] for the replay pass.
enum Spot<'a> {
    Map(&'a Map),
    Seq(&'a [Node]),
}

/// Walk `path` through maps and sequences, returning the innermost sequence
/// entered together with the last index consumed.
///
/// This is the discovery pass behind keys that end in the delimiter, where
/// the addressed value is `sequence[index]` rather than a map entry. The
/// walk switches between map-keyed and sequence-indexed steps as the data
/// dictates: a map value that is a sequence puts the walk into sequence
/// mode, where the next segment must parse as an in-bounds base-10 index.
/// A scalar sequence element ends the walk: successfully on the last
/// segment, as absence otherwise.
///
/// `root` is taken mutably because the map steps scaffold: a scalar sitting
/// where the walk needs a map is replaced with a new empty map. Absent keys
/// are never created, and sequence elements are never fabricated.
///
/// Returns `None` when no sequence was entered, no index was consumed, or
/// the walk failed.
pub fn find_sequence<'a>(root: &'a mut Map, path: &[String]) -> Option<(&'a [Node], usize)> {
    let (depth, index) = locate_sequence(root, path)?;
    let sequence = sequence_at(root, path, depth)?;
    Some((sequence, index))
}

/// Mutating walk. Returns `(depth, index)` where `depth` is the number of
/// segments consumed when the innermost sequence became current and `index`
/// is the last sequence index consumed.
fn locate_sequence(root: &mut Map, path: &[String]) -> Option<(usize, usize)> {
    let total = path.len();
    let mut cursor = Cursor::Map(root);
    let mut seq_depth = 0;
    let mut last_index: Option<usize> = None;
    let mut entered = false;

    for (depth, segment) in (1..=total).zip(path) {
        cursor = match cursor {
            Cursor::Seq(sequence) => {
                let index: usize = segment.parse().ok()?;
                last_index = Some(index);
                match sequence.get_mut(index)? {
                    Node::Map(next) => Cursor::Map(next),
                    Node::Sequence(next) => {
                        entered = true;
                        seq_depth = depth;
                        Cursor::Seq(next)
                    },
                    Node::Scalar(_) => {
                        if depth == total {
                            // Terminal scalar inside the sequence: the pair
                            // already points at it.
                            break;
                        }
                        return None;
                    },
                }
            },
            Cursor::Map(map) => {
                let slot = map.get_mut(segment)?;
                match slot {
                    Node::Map(next) => Cursor::Map(next),
                    Node::Sequence(next) => {
                        entered = true;
                        seq_depth = depth;
                        Cursor::Seq(next)
                    },
                    Node::Scalar(_) => {
                        // A value sits where the walk needs a map: replace
                        // it and continue searching below.
                        *slot = Node::Map(Map::new());
                        let Node::Map(next) = slot else { unreachable!() };
                        Cursor::Map(next)
                    },
                }
            },
        };
    }

    if !entered {
        return None;
    }
    last_index.map(|index| (seq_depth, index))
}

/// Pure replay of the first `depth` segments, arriving at the sequence the
/// mutating pass recorded. The scaffolding already happened, so every step
/// is guaranteed to find its key.
fn sequence_at<'a>(root: &'a Map, path: &[String], depth: usize) -> Option<&'a [Node]> {
    let mut spot = Spot::Map(root);
    for segment in path.get(..depth)? {
        spot = match spot {
            Spot::Seq(sequence) => {
                let index: usize = segment.parse().ok()?;
                match sequence.get(index)? {
                    Node::Map(next) => Spot::Map(next),
                    Node::Sequence(next) => Spot::Seq(next),
                    Node::Scalar(_) => return None,
                }
            },
            Spot::Map(map) => match map.get(segment)? {
                Node::Map(next) => Spot::Map(next),
                Node::Sequence(next) => Spot::Seq(next),
                Node::Scalar(_) => return None,
            },
        };
    }

    match spot {
        Spot::Seq(sequence) => Some(sequence),
        Spot::Map(_) => None,
    }
}
