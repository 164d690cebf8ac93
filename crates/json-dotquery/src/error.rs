//! Error taxonomy for construction, resolution, and typed extraction.

use thiserror::Error;

/// Everything that can go wrong while building a resolver tree or querying it.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes were not well-formed JSON. The decoder's error is
    /// carried as-is rather than reworded.
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),

    /// Path descent was attempted past a scalar or null node.
    #[error("unexpected json data provided, neither array nor object")]
    UnexpectedShape,

    /// An array was being traversed but the segment was not `[<integer>]`.
    #[error("expected index for json array but found something else")]
    IndexNotFound,

    /// A syntactically valid index fell outside the array bounds.
    #[error("index out of bounds of the json array")]
    IndexOutOfBound,

    /// No combination of key-joining candidates resolved the remaining path.
    #[error("no tree satisfies the path elements provided")]
    NoDataFound,

    /// The resolved value does not match the type the getter asked for.
    #[error("data at the specified path does not match the expected type")]
    InvalidType,
}
