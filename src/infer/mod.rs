//! Structural type inference
//!
//! Walks decoded JSON documents and produces named record definitions.
//!
//! # Overview
//!
//! - [`classify`] maps one JSON value (plus its field name) to a [`TypeRef`]
//! - [`extract`] recursively walks an object and collects [`RecordDef`]s,
//!   nested records first (the emitted TypeScript has no forward
//!   declarations, so a record must appear before anything that references it)

mod classify;
mod extract;
mod types;

pub use classify::classify;
pub use extract::extract;
pub use types::{RecordDef, TypeRef};
