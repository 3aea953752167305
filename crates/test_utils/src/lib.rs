//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the warranty assignment test suite.
//! Payloads are plain `serde_json::Value`s so the helpers can build malformed
//! input as easily as well-formed input.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made payloads for the documented scenarios
//! - `builders`: Builder for assignment payloads
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
