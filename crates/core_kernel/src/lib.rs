//! Core Kernel - Foundational types for the warranty assignment system
//!
//! This crate provides the building blocks shared by the domain and API crates:
//! - Strongly-typed identifiers for dealers, warranty packages and assignments
//! - The common error type

pub mod identifiers;
pub mod error;

pub use identifiers::{AssignmentId, DealerId, WarrantyPackageId};
pub use error::CoreError;
