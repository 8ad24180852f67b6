//! # exmono-frontend — Consumer of the Shared Schemas
//!
//! The consuming half of the monorepo example. Exports [`TestEnum2`], a
//! second closed enumeration defined here rather than in the library,
//! and hosts the test suite (under `tests/`) that imports the shared
//! schemas, derives extended schemas, and validates fixture objects.
//!
//! `TestEnum2` implements the library's [`Enumeration`] trait, so it
//! plugs into schema construction exactly like the library's own
//! [`exmono_schema::TestEnum`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use exmono_schema::{Enumeration, SchemaError};

/// A consumer-defined closed tag set, unrelated to the library's.
///
/// Tags: `uhhhm`, `no`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestEnum2 {
    /// Noncommittal.
    Uhhhm,
    /// Definitely not.
    No,
}

impl TestEnum2 {
    /// Returns all variants in declaration order.
    pub fn all() -> &'static [TestEnum2] {
        &[Self::Uhhhm, Self::No]
    }
}

impl Enumeration for TestEnum2 {
    fn name() -> &'static str {
        "TestEnum2"
    }

    fn tags() -> &'static [&'static str] {
        &["uhhhm", "no"]
    }

    fn as_tag(&self) -> &'static str {
        match self {
            Self::Uhhhm => "uhhhm",
            Self::No => "no",
        }
    }
}

impl std::fmt::Display for TestEnum2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for TestEnum2 {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uhhhm" => Ok(Self::Uhhhm),
            "no" => Ok(Self::No),
            other => Err(SchemaError::UnknownTag {
                enumeration: Self::name(),
                tag: other.to_string(),
            }),
        }
    }
}
