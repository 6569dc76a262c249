//! Definition store
//!
//! Accumulates record definitions across extraction passes.
//!
//! # Overview
//!
//! - `from_document` / `from_value` - build a store from one JSON sample
//! - `merge` - fold another store in, deduplicating by content fingerprint
//! - `render` - emit the accumulated definitions as TypeScript

mod definitions;

pub use definitions::DefinitionStore;
