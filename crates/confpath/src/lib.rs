#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Delimited key-path resolution over dynamically shaped configuration trees.
//!
//! Configuration merged from files, flags, and environment variables rarely
//! has a schema known in advance. This crate models such data as a [`Node`]
//! tree of maps, sequences, and opaque scalars, and resolves case-insensitive
//! delimited key paths against it, switching transparently between map-keyed
//! and sequence-indexed traversal as the data dictates.
//!
//! # Usage
//!
//! ```rust
//! use confpath::{insensitivise, resolve_path, Node};
//!
//! let root = Node::from_json_str(r#"{"Server": {"ports": [{"name": "http"}]}}"#).unwrap();
//! let mut root = root.into_map().unwrap();
//!
//! // Lower-case all map keys once, then match keys case-insensitively.
//! // Maps held inside sequences are not rewritten, so keys below `ports`
//! // are spelled lower-case at the source.
//! insensitivise(&mut root);
//!
//! let name = resolve_path(&mut root, ".", "Server.Ports.0.Name");
//! assert_eq!(name.and_then(Node::as_str), Some("http"));
//! ```
//!
//! # Design
//!
//! Three traversal strategies share one walking model: [`scaffold`] creates
//! missing intermediate maps ahead of a write, [`find_map`] walks read-only
//! and reports any miss as absence, and [`find_sequence`] locates the
//! sequence element addressed by a key ending in the delimiter. Absence is a
//! first-class `None` result everywhere; structurally surprising input
//! (out-of-bounds indices, non-integer index segments, sequences of
//! sequences) refuses to descend, it never panics.
//!
//! One level of sequence-of-maps traversal is supported; deeper
//! sequence-of-sequence addressing is deliberately unsupported, as is any
//! key that itself contains the delimiter.

/// Case normalization for mapping keys.
pub mod case;
/// Environment variable candidate scanning.
pub mod env;
/// Configuration error types.
pub mod error;
/// Filesystem path helpers.
pub mod paths;
/// Delimited key-path traversal strategies.
pub mod resolve;
/// Byte-size literal parsing.
pub mod size;
/// The dynamic configuration tree.
pub mod types;

// Re-export primary items at the crate root.
pub use case::{insensitivise, to_case_insensitive};
pub use env::{EnvSource, ProcessEnv, scan_candidates};
pub use error::{ConfigError, ConfigResult};
pub use paths::{abs_pathify, file_exists};
pub use resolve::{find_map, find_sequence, key_path, resolve_path, scaffold};
pub use size::parse_size_in_bytes;
pub use types::{Map, Node, Scalar};
