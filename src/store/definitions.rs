//! Ordered, deduplicating collection of record definitions

use crate::error::{Error, Result};
use crate::infer::{extract, RecordDef};
use crate::render;
use crate::types::{JsonObject, JsonValue};
use std::collections::HashSet;
use std::io::Write;

/// Ordered sequence of record definitions accumulated from one or more
/// extraction passes.
///
/// A store is owned by a single session. Definitions are never mutated in
/// place; `merge` only appends and filters.
#[derive(Debug, Clone, Default)]
pub struct DefinitionStore {
    definitions: Vec<RecordDef>,
}

impl DefinitionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw JSON text.
    ///
    /// The document root must be an object, or a non-empty array whose first
    /// element is an object (the sampled shape for the whole array). `name`
    /// becomes the root record's name.
    pub fn from_document(body: &str, name: &str) -> Result<Self> {
        let value: JsonValue =
            serde_json::from_str(body).map_err(|e| Error::decode(e.to_string()))?;
        Self::from_value(&value, name)
    }

    /// Build a store from an already decoded JSON value.
    ///
    /// A document either contributes its complete definition set or, on any
    /// extraction failure, nothing at all.
    pub fn from_value(value: &JsonValue, name: &str) -> Result<Self> {
        let root = sample_root(value)?;
        let definitions = extract(root, name)?;
        Ok(Self { definitions })
    }

    /// Append another store's definitions, then drop duplicates by content
    /// fingerprint. The first occurrence of each fingerprint survives and
    /// relative order is preserved.
    pub fn merge(&mut self, other: DefinitionStore) {
        self.definitions.extend(other.definitions);

        let mut seen = HashSet::new();
        self.definitions
            .retain(|definition| seen.insert(definition.fingerprint()));
    }

    /// Render every definition in order, blank line separated.
    pub fn render<W: Write>(&self, writer: &mut W) -> Result<()> {
        render::write_definitions(&self.definitions, writer)
    }

    /// Render every definition to a string.
    pub fn render_to_string(&self) -> String {
        render::render_to_string(&self.definitions)
    }

    /// The accumulated definitions, in emission order
    pub fn definitions(&self) -> &[RecordDef] {
        &self.definitions
    }

    /// Number of definitions held
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the store holds no definitions
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Pick the object to extract from a document root.
///
/// Arrays are sampled by their first element; the rest of the array is
/// assumed to share its shape.
fn sample_root(value: &JsonValue) -> Result<&JsonObject> {
    match value {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Array(items) => match items.first() {
            Some(JsonValue::Object(map)) => Ok(map),
            Some(_) => Err(Error::shape(
                "array document must hold objects, found a non-object element",
            )),
            None => Err(Error::shape("array document is empty, nothing to sample")),
        },
        _ => Err(Error::shape(
            "document root must be an object or a non-empty array of objects",
        )),
    }
}
