//! # Composable Object Schemas
//!
//! Runtime validation of JSON values against object schemas built from
//! field-predicate pairs. Each [`ObjectSchema`] owns an immutable JSON
//! Schema (Draft 2020-12) document; validation is delegated to the
//! `jsonschema` crate and failures come back as structured
//! [`Violation`]s rather than panics.
//!
//! ## Extension
//!
//! [`ObjectSchema::extend`] is a pure structural merge: the receiver's
//! `properties` map is cloned, the new field predicates are merged in,
//! `required` is rebuilt from the resulting property set, and a new
//! schema value is returned. The receiver is never mutated, so derived
//! schemas and their originals stay independently usable.
//!
//! ## Unknown fields
//!
//! Generated documents never set `additionalProperties`, so instances
//! carrying fields the schema does not describe are tolerated.

use jsonschema::Validator;
use serde_json::{json, Map, Value};

use crate::enums::Enumeration;
use crate::report::{ValidationViolations, Violation};

/// Value constraint for a single required field of an [`ObjectSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A JSON boolean.
    Boolean,
    /// A JSON integer.
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A string restricted to a closed tag set.
    Enum(&'static [&'static str]),
}

impl FieldType {
    /// Constrain a field to the tag set of a closed enumeration.
    pub fn enumeration<E: Enumeration>() -> Self {
        Self::Enum(E::tags())
    }

    /// The JSON Schema fragment expressing this constraint.
    fn constraint(&self) -> Value {
        match self {
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Integer => json!({ "type": "integer" }),
            Self::Number => json!({ "type": "number" }),
            Self::String => json!({ "type": "string" }),
            Self::Enum(tags) => json!({ "enum": tags }),
        }
    }
}

/// An immutable, named validation schema for JSON objects.
///
/// Every field named at construction (or added by [`extend`]) is
/// required; its value must satisfy the paired [`FieldType`] predicate.
///
/// ## Thread Safety
///
/// `ObjectSchema` owns only a name and a document and is `Send + Sync`;
/// the published schemas are shared across threads behind statics.
///
/// [`extend`]: ObjectSchema::extend
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    /// Diagnostic name, carried into violation logging.
    name: String,
    /// The JSON Schema (Draft 2020-12) document.
    document: Value,
}

impl ObjectSchema {
    /// Build a schema from field-predicate pairs.
    ///
    /// Construction is pure and infallible: documents produced here
    /// always compile to a validator.
    pub fn new(name: impl Into<String>, fields: &[(&str, FieldType)]) -> Self {
        let name = name.into();
        let document = build_document(&name, Map::new(), fields);
        Self { name, document }
    }

    /// Wrap an existing JSON Schema document under a diagnostic name.
    ///
    /// No compilation happens here; a document that later fails to
    /// compile is reported by [`validate`](Self::validate) as a single
    /// root violation.
    pub fn from_document(name: impl Into<String>, document: Value) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }

    /// Derive a new schema by adding field-predicate pairs.
    ///
    /// Non-mutating: returns a new schema whose `properties` are the
    /// structural merge of the receiver's and `fields`, with `required`
    /// rebuilt from the merged property set. A field name that already
    /// exists is overwritten by the new predicate. The receiver is
    /// unchanged and remains independently usable.
    pub fn extend(&self, name: impl Into<String>, fields: &[(&str, FieldType)]) -> Self {
        let name = name.into();
        let properties = self
            .document
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let document = build_document(&name, properties, fields);
        tracing::trace!(base = %self.name, derived = %name, "extended schema");
        Self { name, document }
    }

    /// The schema's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying JSON Schema document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Names of all described fields, in document order.
    pub fn field_names(&self) -> Vec<&str> {
        self.document
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Validate an instance against this schema.
    ///
    /// Never panics. On success returns the accepted value as given (no
    /// coercion or defaulting); on failure returns every violation the
    /// validator reports, each with the instance path, schema path, and
    /// message.
    pub fn validate(&self, instance: &Value) -> Result<Value, ValidationViolations> {
        let validator = match self.build_validator() {
            Ok(v) => v,
            Err(reason) => {
                tracing::debug!(schema = %self.name, %reason, "schema document did not compile");
                return Err(ValidationViolations::new(vec![Violation {
                    instance_path: String::new(),
                    schema_path: String::new(),
                    message: format!("schema '{}' did not compile: {reason}", self.name),
                }]));
            }
        };

        let violations: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            tracing::trace!(schema = %self.name, "validation succeeded");
            Ok(instance.clone())
        } else {
            tracing::debug!(
                schema = %self.name,
                violations = violations.len(),
                "validation failed"
            );
            Err(ValidationViolations::new(violations))
        }
    }

    /// Convenience wrapper over [`validate`](Self::validate) discarding
    /// the report.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_ok()
    }

    /// Compile the document into a Draft 2020-12 validator.
    fn build_validator(&self) -> Result<Validator, String> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.build(&self.document).map_err(|e| e.to_string())
    }
}

/// Assemble an object-schema document from existing properties plus new
/// field-predicate pairs. `required` lists every property, so all
/// described fields are mandatory.
fn build_document(
    name: &str,
    mut properties: Map<String, Value>,
    fields: &[(&str, FieldType)],
) -> Value {
    for (field, ty) in fields {
        properties.insert((*field).to_string(), ty.constraint());
    }
    let required: Vec<Value> = properties
        .keys()
        .map(|k| Value::String(k.clone()))
        .collect();
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": name,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}
