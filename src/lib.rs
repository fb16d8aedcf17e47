//! Typed, self-validating schemas for declaring the targets of a bespoke
//! force field fit. Each target describes one category of reference data
//! (torsion profile energies, vibrational frequencies, optimized geometries)
//! that a downstream optimizer consumes to refit model parameters.
//!
//! # Features
//!
//! - **Closed target union** - Four target variants sharing a common
//!   contract, discriminated by a `type` tag for both in-memory dispatch
//!   and serialization
//! - **Construction-time validation** - Positive weights and the task kind
//!   invariant are enforced when a target is built *and* when it is
//!   deserialized; an inconsistent target is never observable
//! - **Reference data union** - Each variant accepts either an existing
//!   result collection or a bespoke set of QC tasks still to be executed
//! - **Target set loading** - TOML target configurations with an embedded
//!   default set, plus JSON round-tripping of individual schemas
//!
//! # Quick Start
//!
//! Declare a torsion profile target backed by bespoke torsion scans:
//!
//! ```
//! use bespoke_targets::{
//!     BespokeQcData, QcTask, TargetSchema, TaskKind, TorsionDriveReference,
//!     TorsionProfileTarget,
//! };
//!
//! // Two torsion scans around the bonds being refit.
//! let tasks = BespokeQcData::new(vec![
//!     QcTask::Torsion1d {
//!         smiles: "[CH3:1][CH2:2][OH:3]".into(),
//!         central_bond: (0, 1),
//!     },
//!     QcTask::Torsion1d {
//!         smiles: "[CH3:1][CH2:2][OH:3]".into(),
//!         central_bond: (1, 2),
//!     },
//! ]);
//!
//! let target = TorsionProfileTarget::new(2.0)?
//!     .with_reference_data(TorsionDriveReference::Bespoke(tasks))?;
//!
//! let schema = TargetSchema::from(target);
//! assert_eq!(schema.task_kind(), TaskKind::Torsion1d);
//! assert_eq!(schema.weight(), 2.0);
//! assert_eq!(schema.bespoke_data().map(|data| data.task_count()), Some(2));
//!
//! // The serialized form carries the discriminator and survives a round trip.
//! let json = schema.to_json()?;
//! assert!(json.contains(r#""type":"TorsionProfile""#));
//! assert_eq!(TargetSchema::from_json(&json)?, schema);
//!
//! // Mixing in a task of the wrong kind fails at construction time.
//! let mixed = BespokeQcData::new(vec![QcTask::Hessian { smiles: "CCO".into() }]);
//! assert!(
//!     TorsionProfileTarget::new(1.0)?
//!         .with_reference_data(TorsionDriveReference::Bespoke(mixed))
//!         .is_err()
//! );
//! # Ok::<(), bespoke_targets::TargetError>(())
//! ```
//!
//! # Data Types
//!
//! ## Targets
//!
//! - [`TargetSchema`] - The closed union of all target variants
//! - [`TorsionProfileTarget`] - Torsion profile energies (torsion1d tasks)
//! - [`AbInitioTarget`] - Ab initio energies and forces (torsion1d tasks)
//! - [`VibrationTarget`] - Vibrational frequencies (hessian tasks)
//! - [`OptGeoTarget`] - Optimized geometries (optimization tasks)
//!
//! ## Reference Data
//!
//! - [`ReferenceData`] - Existing results or bespoke tasks, per variant
//! - [`BespokeQcData`] / [`QcTask`] - QC tasks still to be executed
//! - [`TorsionDriveResultCollection`], [`BasicResultCollection`],
//!   [`OptimizationResultCollection`] - Opaque already-computed datasets
//! - [`TaskKind`] - The category of QC computation a task performs
//!
//! ## Loading
//!
//! - [`load_targets`] / [`default_targets`] - TOML target set loading

mod model;
mod targets;

pub use model::data::{BespokeQcData, QcTask, ReferenceData};
pub use model::results::{
    BasicResultCollection, OptimizationResultCollection, ResultRecord, TorsionDriveResultCollection,
};
pub use model::types::{ModeReassignment, ParseModeReassignmentError, ParseTaskKindError, TaskKind};

pub use targets::{
    default_targets, load_targets, AbInitioTarget, BasicReference, OptGeoTarget,
    OptimizationReference, TargetSchema, TorsionDriveReference, TorsionProfileTarget,
    VibrationTarget,
};

pub use targets::Error as TargetError;
