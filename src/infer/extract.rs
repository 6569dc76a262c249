//! Record extraction
//!
//! Recursively walks a JSON object and produces the ordered list of record
//! definitions describing it.

use super::classify::classify;
use super::types::RecordDef;
use crate::error::{Error, Result};
use crate::types::JsonObject;
use std::collections::BTreeMap;

/// Extract record definitions from an object.
///
/// Every field is classified and its rendered type stored as a property of
/// the record named `name`. Fields carrying a nested payload recurse first,
/// so nested records always precede the record that references them in the
/// returned sequence.
///
/// Extraction is all-or-nothing: on failure the partially built sequence is
/// discarded and nothing is surfaced to the caller.
pub fn extract(object: &JsonObject, name: &str) -> Result<Vec<RecordDef>> {
    let mut definitions = Vec::new();
    extract_into(object, name, &mut definitions)?;
    Ok(definitions)
}

fn extract_into(object: &JsonObject, name: &str, definitions: &mut Vec<RecordDef>) -> Result<()> {
    let mut properties = BTreeMap::new();

    for (key, value) in object {
        let type_ref = classify(value, key);
        properties.insert(key.clone(), type_ref.render());

        if let Some(nested) = &type_ref.nested {
            let nested_object = nested
                .as_object()
                .ok_or_else(|| Error::nested_type(key.clone()))?;
            extract_into(nested_object, &type_ref.name, definitions)?;
        }
    }

    definitions.push(RecordDef::new(name, properties));
    Ok(())
}
