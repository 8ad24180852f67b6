//! # exmono-schema — Shared Schemas for the exmono Workspace
//!
//! The library half of the monorepo example: publishes a closed tag
//! enumeration and two composable validation schemas for reuse by any
//! consuming crate.
//!
//! ## Exports
//!
//! - [`TestEnum`] — the closed tag set {`bird`, `plane`, `idk`},
//!   usable as a typed value and as a membership predicate.
//! - [`test_schema`] — validates an object with a required boolean
//!   `isItAwesome` field.
//! - [`test_schema2`] — [`test_schema`] extended with a required
//!   `whatIsIt` field constrained to [`TestEnum`]'s tags.
//! - [`foo`] — linkage probe returning a constant string.
//!
//! Consumers derive their own schemas with [`ObjectSchema::extend`] and
//! plug their own enumerations in via the [`Enumeration`] trait;
//! extension never mutates the published values.
//!
//! ## Validation Contract
//!
//! [`ObjectSchema::validate`] never panics: it returns `Ok` with the
//! accepted value, or `Err` with a structured, serializable
//! [`ValidationViolations`] report. Fields not described by a schema
//! are tolerated.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (this is the leaf of the workspace DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All published schema and enum values are created once and never
//!   mutated.

use std::sync::OnceLock;

pub mod enums;
pub mod error;
pub mod report;
pub mod schema;

// Re-export primary types for ergonomic imports.
pub use enums::{Enumeration, TestEnum};
pub use error::SchemaError;
pub use report::{ValidationViolations, Violation};
pub use schema::{FieldType, ObjectSchema};

/// Linkage probe: proves a consumer is wired to this library.
pub fn foo() -> &'static str {
    "bar"
}

/// The base schema: an object with a required boolean `isItAwesome`.
pub fn test_schema() -> &'static ObjectSchema {
    static SCHEMA: OnceLock<ObjectSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ObjectSchema::new("TestSchema", &[("isItAwesome", FieldType::Boolean)]))
}

/// The base schema extended with a required `whatIsIt` field whose
/// value must be one of [`TestEnum`]'s tags.
pub fn test_schema2() -> &'static ObjectSchema {
    static SCHEMA: OnceLock<ObjectSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        test_schema().extend(
            "TestSchema2",
            &[("whatIsIt", FieldType::enumeration::<TestEnum>())],
        )
    })
}
