//! Data structures shared between fitting targets and their collaborators.
//!
//! This module provides the types that flow through `bespoke-targets`:
//!
//! - [`types`] - Task kind and mode reassignment enumerations.
//! - [`data`] - Bespoke (not yet executed) QC task sets and the reference
//!   data union attached to targets.
//! - [`results`] - Opaque collections of already-computed QC results.
//!
//! The data model intentionally separates what a target *is* (the schema
//! variants in [`crate::targets`]) from the reference data it consumes, so
//! the task-generation and optimizer components can share these types
//! without depending on any particular target variant.

pub mod data;
pub mod results;
pub mod types;
