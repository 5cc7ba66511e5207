//! Delimited key-path traversal strategies.
//!
//! A key like `"server.ports.0.name"` is split on a configurable delimiter
//! and walked against a [`Map`] root. Three strategies share one walking
//! model:
//!
//! - [`scaffold`] creates missing intermediate maps on the way down and is
//!   used when a value is about to be written at the full path;
//! - [`find_map`] walks read-only and reports any miss as absence;
//! - [`find_sequence`] walks through maps and sequences to locate the
//!   innermost sequence a trailing-delimiter key addresses.
//!
//! [`resolve_path`] is the combined read entry point. Absence is always a
//! first-class `None` outcome: out-of-bounds indices, non-integer index
//! segments, and unsupported nesting refuse to descend rather than panic.

mod arrays;
mod read;
mod scaffold;

pub use arrays::find_sequence;
pub use read::find_map;
pub use scaffold::scaffold;

use tracing::trace;

use crate::types::{Map, Node};

/// Split a raw key into lower-cased path segments.
///
/// The whole key is lower-cased before splitting, so segments match maps
/// that have been through the case normalizer. An empty delimiter yields the
/// whole key as a single segment.
pub fn key_path(key: &str, delimiter: &str) -> Vec<String> {
    let lowered = key.to_lowercase();
    if delimiter.is_empty() {
        return vec![lowered];
    }
    lowered.split(delimiter).map(str::to_owned).collect()
}

/// Resolve a delimited key against `root`, returning the addressed node.
///
/// The final segment is looked up in the map reached by walking the parent
/// segments with [`find_map`]. A blank final segment (key ends in the
/// delimiter) instead addresses a sequence element: the parent segments are
/// walked with [`find_sequence`] and the located element is returned. That
/// branch may scaffold intermediate maps, which is why `root` is taken
/// mutably; see [`find_sequence`].
pub fn resolve_path<'a>(root: &'a mut Map, delimiter: &str, key: &str) -> Option<&'a Node> {
    let path = key_path(key, delimiter);
    let (last_key, parents) = path.split_last()?;
    trace!(key, last_key = %last_key, "resolving delimited key");

    if last_key.is_empty() {
        let (sequence, index) = find_sequence(root, parents)?;
        sequence.get(index)
    } else {
        find_map(&*root, parents)?.get(last_key.as_str())
    }
}

#[cfg(test)]
mod tests;
