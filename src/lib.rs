//! # typegen
//!
//! Infers TypeScript interface definitions from sampled JSON documents and
//! deduplicates equivalent definitions discovered across independent samples.
//!
//! ## Features
//!
//! - **Structural Inference**: Walks decoded JSON and classifies every field
//! - **Bottom-Up Emission**: Nested records are defined before their parents
//! - **Cross-Sample Merge**: Content-fingerprint dedup across API responses
//! - **Sample Fetching**: Pull samples straight from HTTP endpoints
//! - **Batch Manifests**: Describe a whole set of endpoints in YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use typegen::{DefinitionStore, Result};
//!
//! fn main() -> Result<()> {
//!     let sample = r#"{"name": "test", "option": {"size": "XL"}}"#;
//!
//!     let mut session = typegen::DefinitionStore::new();
//!     session.merge(DefinitionStore::from_document(sample, "Main")?);
//!
//!     print!("{}", session.render_to_string());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bytes ──decode──▶ JSON value ──extract──▶ [RecordDef] ──merge──▶ store ──render──▶ .ts
//!                                   │
//!                            classify(field)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Structural type inference
pub mod infer;

/// Definition store and deduplication
pub mod store;

/// TypeScript rendering
pub mod render;

/// HTTP fetching of sample documents
pub mod http;

/// Generation manifest (YAML)
pub mod manifest;

/// Record naming helpers
pub mod naming;

/// File output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use infer::{classify, extract, RecordDef, TypeRef};
pub use store::DefinitionStore;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
