//! Diff engine for massive-patch.
//!
//! Computes a JSON-Patch (RFC 6902) document describing how to turn one
//! JSON value into another. Only patch *generation* lives here; nothing in
//! this crate applies patches.
//!
//! # Key Types
//!
//! - [`Patch`] / [`PatchOperation`] -- Ordered list of `add`/`remove`/`replace` operations
//! - [`diff`] -- Deterministic structural diff between two `serde_json::Value`s
//! - [`pointer`] -- RFC 6901 JSON pointer escaping

pub mod error;
pub mod json_diff;
pub mod patch;
pub mod pointer;

pub use error::{DiffError, DiffResult};
pub use json_diff::diff;
pub use patch::{Patch, PatchOperation};
