use serde::{Deserialize, Serialize};

use super::types::TaskKind;

/// A single QC computation that still needs to be executed.
///
/// Tasks are discriminated on the wire by a `task_type` tag whose values
/// match [`TaskKind`] string forms, so a serialized task can be routed to
/// the right execution backend without inspecting its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task_type", rename_all = "snake_case")]
pub enum QcTask {
    /// A one-dimensional scan around a central rotatable bond.
    Torsion1d {
        smiles: String,
        /// Indices of the two atoms defining the bond being driven.
        central_bond: (usize, usize),
    },
    /// A geometry optimization of the input conformer.
    Optimization { smiles: String },
    /// A Hessian evaluation at the optimized geometry.
    Hessian { smiles: String },
}

impl QcTask {
    pub fn task_kind(&self) -> TaskKind {
        match self {
            QcTask::Torsion1d { .. } => TaskKind::Torsion1d,
            QcTask::Optimization { .. } => TaskKind::Optimization,
            QcTask::Hessian { .. } => TaskKind::Hessian,
        }
    }

    pub fn smiles(&self) -> &str {
        match self {
            QcTask::Torsion1d { smiles, .. }
            | QcTask::Optimization { smiles }
            | QcTask::Hessian { smiles } => smiles,
        }
    }
}

/// A set of QC tasks to be executed on the fly to generate reference data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BespokeQcData {
    pub tasks: Vec<QcTask>,
}

impl BespokeQcData {
    pub fn new(tasks: Vec<QcTask>) -> Self {
        Self { tasks }
    }

    #[inline]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Reference data attached to a fitting target: either results that already
/// exist in a QC archive, or bespoke tasks still to be executed.
///
/// The wire form is untagged; the two arms are told apart by their required
/// fields (`entries` for collections, `tasks` for bespoke data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceData<C> {
    /// An already-computed result collection.
    Existing(C),
    /// A bespoke task set that will produce the results once executed.
    Bespoke(BespokeQcData),
}

impl<C> ReferenceData<C> {
    pub fn as_bespoke(&self) -> Option<&BespokeQcData> {
        match self {
            ReferenceData::Bespoke(data) => Some(data),
            ReferenceData::Existing(_) => None,
        }
    }

    #[inline]
    pub fn is_bespoke(&self) -> bool {
        matches!(self, ReferenceData::Bespoke(_))
    }
}
