//! # Closed Tag Enumerations
//!
//! Defines the [`Enumeration`] trait (the contract for a closed, named
//! set of string tags) and [`TestEnum`], the enumeration published by
//! this library. A consuming crate implements `Enumeration` for its own
//! enums and plugs them into schema construction exactly the way this
//! library does (see [`crate::FieldType::enumeration`]).
//!
//! ## Design
//!
//! An enumeration is usable two ways: as a typed value (`TestEnum::Bird`,
//! serialized to its tag) and as a membership predicate over raw strings
//! (`TestEnum::is_tag("bird")`, or the `enum` constraint of an
//! [`crate::ObjectSchema`] field). Membership is closed: every `match`
//! on the variants is exhaustive, and parsing anything outside the tag
//! set fails.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A closed, named set of string tags.
///
/// Implementors are fieldless enums whose serde representation is the
/// tag string itself. The provided [`is_tag`](Enumeration::is_tag) check
/// and the [`tags`](Enumeration::tags) slice let schemas constrain a
/// field to the member set without knowing the concrete enum.
pub trait Enumeration {
    /// Name of the enumeration, used in diagnostics.
    fn name() -> &'static str;

    /// All permitted tags, in declaration order.
    fn tags() -> &'static [&'static str];

    /// The tag for this variant. Must match the serde serialization.
    fn as_tag(&self) -> &'static str;

    /// Membership test against the closed tag set.
    fn is_tag(candidate: &str) -> bool {
        Self::tags().contains(&candidate)
    }
}

/// The enumeration published by the shared library.
///
/// Tags: `bird`, `plane`, `idk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestEnum {
    /// It's a bird.
    Bird,
    /// It's a plane.
    Plane,
    /// No idea.
    Idk,
}

impl TestEnum {
    /// Returns all variants in declaration order.
    pub fn all() -> &'static [TestEnum] {
        &[Self::Bird, Self::Plane, Self::Idk]
    }
}

impl Enumeration for TestEnum {
    fn name() -> &'static str {
        "TestEnum"
    }

    fn tags() -> &'static [&'static str] {
        &["bird", "plane", "idk"]
    }

    fn as_tag(&self) -> &'static str {
        match self {
            Self::Bird => "bird",
            Self::Plane => "plane",
            Self::Idk => "idk",
        }
    }
}

impl std::fmt::Display for TestEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for TestEnum {
    type Err = SchemaError;

    /// Parse a variant from its tag. Accepts exactly the tags produced
    /// by [`Enumeration::as_tag`]; case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bird" => Ok(Self::Bird),
            "plane" => Ok(Self::Plane),
            "idk" => Ok(Self::Idk),
            other => Err(SchemaError::UnknownTag {
                enumeration: Self::name(),
                tag: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_variants() {
        assert_eq!(TestEnum::all().len(), TestEnum::tags().len());
        for (variant, tag) in TestEnum::all().iter().zip(TestEnum::tags()) {
            assert_eq!(variant.as_tag(), *tag);
        }
    }

    #[test]
    fn as_tag_roundtrip() {
        for variant in TestEnum::all() {
            let parsed: TestEnum = variant.as_tag().parse().unwrap();
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn from_str_rejects_non_members() {
        assert!("superman".parse::<TestEnum>().is_err());
        assert!("Bird".parse::<TestEnum>().is_err()); // case-sensitive
        assert!("".parse::<TestEnum>().is_err());
    }

    #[test]
    fn from_str_error_names_enumeration_and_tag() {
        let err = "superman".parse::<TestEnum>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("TestEnum"), "message was: {msg}");
        assert!(msg.contains("superman"), "message was: {msg}");
    }

    #[test]
    fn serde_format_matches_as_tag() {
        for variant in TestEnum::all() {
            let json = serde_json::to_string(variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_tag()));
        }
    }

    #[test]
    fn serde_roundtrip() {
        for variant in TestEnum::all() {
            let json = serde_json::to_string(variant).unwrap();
            let parsed: TestEnum = serde_json::from_str(&json).unwrap();
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn display_matches_as_tag() {
        for variant in TestEnum::all() {
            assert_eq!(format!("{variant}"), variant.as_tag());
        }
    }

    #[test]
    fn membership_is_closed() {
        assert!(TestEnum::is_tag("bird"));
        assert!(TestEnum::is_tag("plane"));
        assert!(TestEnum::is_tag("idk"));
        assert!(!TestEnum::is_tag("maybe"));
        assert!(!TestEnum::is_tag("IDK"));
    }
}
