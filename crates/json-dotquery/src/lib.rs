//! Dotted-path queries over decoded JSON.
//!
//! A [`Resolver`] wraps one node of a decoded JSON tree together with a
//! cache of the children already reached through it. Paths are dotted:
//! `a.[0].b` descends into key `a`, index `0`, then key `b`. Keys containing
//! literal dots need no escaping; resolution tries the shortest matching key
//! first and falls back to progressively longer dot-joined candidates.
//!
//! Resolvers are cheap to share across threads. The caches use one
//! reader-writer lock per node, so repeated traversal of one subtree never
//! contends with queries elsewhere in the tree.
//!
//! # Example
//!
//! ```
//! use json_dotquery::Resolver;
//!
//! let root = Resolver::new(br#"{"a": {"arr": [{"c": {"d": {"e": "f"}}}], "x": "p"}}"#)?;
//!
//! let d = root.child("a.arr.[0].c.d")?;
//! assert_eq!(d.get_string("e")?, "f");
//! assert_eq!(root.get_string("a.x")?, "p");
//! # Ok::<(), json_dotquery::Error>(())
//! ```

mod error;
mod get;
mod path;
mod resolver;
mod value;

pub use error::Error;
pub use resolver::Resolver;
pub use value::JsonValue;
