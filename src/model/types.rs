use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported task kind: '{0}'")]
pub struct ParseTaskKindError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid mode reassignment method: '{0}'")]
pub struct ParseModeReassignmentError(String);

/// The category of upstream QC computation that produces reference data.
///
/// Every pending task carries one of these tags, and every target variant
/// declares the single kind it can consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// A one-dimensional torsion scan.
    Torsion1d,
    /// A geometry optimization.
    Optimization,
    /// A Hessian (second derivative) evaluation.
    Hessian,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Torsion1d => "torsion1d",
            TaskKind::Optimization => "optimization",
            TaskKind::Hessian => "hessian",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = ParseTaskKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "torsion1d" => Ok(TaskKind::Torsion1d),
            "optimization" => Ok(TaskKind::Optimization),
            "hessian" => Ok(TaskKind::Hessian),
            _ => Err(ParseTaskKindError(s.to_string())),
        }
    }
}

/// Method by which vibrational normal modes are re-assigned before
/// comparison against reference frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeReassignment {
    /// Permute modes to minimise the total frequency difference.
    Permute,
    /// Match modes by eigenvector overlap.
    Overlap,
}

impl ModeReassignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeReassignment::Permute => "permute",
            ModeReassignment::Overlap => "overlap",
        }
    }
}

impl fmt::Display for ModeReassignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeReassignment {
    type Err = ParseModeReassignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permute" => Ok(ModeReassignment::Permute),
            "overlap" => Ok(ModeReassignment::Overlap),
            _ => Err(ParseModeReassignmentError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn task_kind_from_str_valid() {
        assert_eq!(TaskKind::from_str("torsion1d").unwrap(), TaskKind::Torsion1d);
        assert_eq!(
            TaskKind::from_str("optimization").unwrap(),
            TaskKind::Optimization
        );
        assert_eq!(TaskKind::from_str("hessian").unwrap(), TaskKind::Hessian);
    }

    #[test]
    fn task_kind_from_str_invalid() {
        let err = TaskKind::from_str("Torsion1D").unwrap_err();
        let s = format!("{}", err);
        assert_eq!(s, "invalid or unsupported task kind: 'Torsion1D'");
    }

    #[test]
    fn task_kind_display_matches_as_str() {
        assert_eq!(TaskKind::Torsion1d.to_string(), "torsion1d");
        assert_eq!(TaskKind::Optimization.to_string(), "optimization");
        assert_eq!(TaskKind::Hessian.to_string(), "hessian");
    }

    #[test]
    fn task_kind_serde_form() {
        let json = serde_json::to_string(&TaskKind::Torsion1d).unwrap();
        assert_eq!(json, "\"torsion1d\"");

        let kind: TaskKind = serde_json::from_str("\"hessian\"").unwrap();
        assert_eq!(kind, TaskKind::Hessian);
    }

    #[test]
    fn mode_reassignment_from_str_variants() {
        assert_eq!(
            ModeReassignment::from_str("permute").unwrap(),
            ModeReassignment::Permute
        );
        assert_eq!(
            ModeReassignment::from_str("overlap").unwrap(),
            ModeReassignment::Overlap
        );
    }

    #[test]
    fn mode_reassignment_from_str_invalid() {
        let err = ModeReassignment::from_str("sort").unwrap_err();
        let s = format!("{}", err);
        assert_eq!(s, "invalid mode reassignment method: 'sort'");
    }

    #[test]
    fn mode_reassignment_serde_form() {
        let json = serde_json::to_string(&ModeReassignment::Overlap).unwrap();
        assert_eq!(json, "\"overlap\"");

        let mode: ModeReassignment = serde_json::from_str("\"permute\"").unwrap();
        assert_eq!(mode, ModeReassignment::Permute);
    }
}
