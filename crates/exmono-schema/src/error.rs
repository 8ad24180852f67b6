//! # Error Types
//!
//! Errors raised by the shared schema library. Validation failures are
//! NOT errors in this sense: they are returned as data
//! ([`crate::ValidationViolations`]) so callers branch on the result
//! instead of unwinding. `SchemaError` covers the remaining recoverable
//! condition, parsing a tag that is not a member of a closed enumeration.

use thiserror::Error;

/// Error raised by the shared schema library.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A string tag was not a member of the named closed enumeration.
    #[error("unknown tag {tag:?} for enumeration {enumeration}")]
    UnknownTag {
        /// Name of the enumeration the tag was parsed against.
        enumeration: &'static str,
        /// The rejected candidate tag.
        tag: String,
    },
}
