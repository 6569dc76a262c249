//! Inference types

use crate::types::JsonValue;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Resolved type of a single field
///
/// Describes how the field should be rendered: a bare type name, or a name
/// wrapped in a render pattern such as `Array<%s>` or `Partial<%s>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Semantic label: a primitive name (`string`, `number`, `boolean`,
    /// `Date`, `unknown`) or a derived record name
    pub name: String,

    /// Nested payload requiring further record extraction, always
    /// object-shaped; absent for primitives
    pub nested: Option<JsonValue>,

    /// Render template with exactly one `%s` placeholder; absent means the
    /// name is rendered verbatim
    pub pattern: Option<String>,
}

impl TypeRef {
    /// Create a primitive reference with no nested payload or pattern
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nested: None,
            pattern: None,
        }
    }

    /// Render the reference to its TypeScript type string
    pub fn render(&self) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replacen("%s", &self.name, 1),
            None => self.name.clone(),
        }
    }

    /// The pattern this reference contributes when wrapped by an outer
    /// pattern (`%s` when the name renders verbatim)
    pub(crate) fn extend(&self) -> &str {
        self.pattern.as_deref().unwrap_or("%s")
    }
}

/// A fully resolved named record
///
/// Immutable once built; deduplication filters whole definitions, it never
/// edits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    /// Record name, unique within a single extraction pass
    pub name: String,

    /// Field name to rendered type string
    pub properties: BTreeMap<String, String>,
}

impl RecordDef {
    /// Create a new record definition
    pub fn new(name: impl Into<String>, properties: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Content fingerprint used for deduplication
    ///
    /// SHA-256 over the case-folded name and the case-folded `(field, type)`
    /// pairs in sorted field order. Two definitions with the same name and
    /// property set (ignoring case and property order) fingerprint equal.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.name.to_lowercase().as_bytes());
        for (field, rendered) in &self.properties {
            hasher.update([0u8]);
            hasher.update(field.to_lowercase().as_bytes());
            hasher.update([1u8]);
            hasher.update(rendered.to_lowercase().as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}
