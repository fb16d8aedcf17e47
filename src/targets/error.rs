//! Error types for target schema construction and parsing.
//!
//! This module defines the error type used throughout the targets module.
//! Errors are categorized by source: field validation, cross-field task
//! kind checks, and schema document parsing.

use thiserror::Error;

use crate::model::types::TaskKind;

/// Errors that can occur while constructing or parsing a fitting target.
///
/// Every failure here blocks construction entirely; no partially validated
/// target is ever returned.
#[derive(Debug, Error)]
pub enum Error {
    /// The target weight was zero, negative, or not a number.
    #[error("target weight must be a positive number, got {0}")]
    NonPositiveWeight(f64),

    /// A bespoke task set contained tasks of the wrong kind for the target
    /// it was attached to.
    #[error("bespoke reference tasks must all be of kind '{expected}': {detail}")]
    TaskKindMismatch {
        /// The task kind required by the target variant.
        expected: TaskKind,
        /// Which tasks violated the requirement.
        detail: String,
    },

    /// Failed to serialize a target schema or parse one from JSON.
    ///
    /// Covers malformed documents, unrecognized `type` discriminators, and
    /// validation failures surfaced through deserialization.
    #[error("failed to parse target schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a TOML target configuration document.
    #[error("failed to parse target configuration: {0}")]
    TargetParse(#[from] toml::de::Error),
}

impl Error {
    /// Creates a [`TaskKindMismatch`](Error::TaskKindMismatch) error.
    pub fn task_kind_mismatch(expected: TaskKind, detail: impl Into<String>) -> Self {
        Self::TaskKindMismatch {
            expected,
            detail: detail.into(),
        }
    }
}
