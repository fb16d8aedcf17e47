use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::Error;
use super::{check_bespoke_tasks, check_weight, default_weight};
use crate::model::data::ReferenceData;
use crate::model::results::OptimizationResultCollection;
use crate::model::types::TaskKind;

/// Reference data accepted by optimized geometry targets: either existing
/// optimization results or bespoke optimization tasks still to be executed.
pub type OptimizationReference = ReferenceData<OptimizationResultCollection>;

fn default_bond_denominator() -> f64 {
    0.05
}
fn default_angle_denominator() -> f64 {
    8.0
}
fn default_dihedral_denominator() -> f64 {
    0.0
}
fn default_improper_denominator() -> f64 {
    20.0
}

/// A fitting target that compares force field and QC optimized geometries.
///
/// The denominators scale the contribution of each internal coordinate
/// class to the objective function; a denominator of zero disables that
/// class entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOptGeo")]
pub struct OptGeoTarget {
    weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_data: Option<OptimizationReference>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extras: HashMap<String, String>,
    bond_denominator: f64,
    angle_denominator: f64,
    dihedral_denominator: f64,
    improper_denominator: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptGeo {
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    reference_data: Option<OptimizationReference>,
    #[serde(default)]
    extras: HashMap<String, String>,
    #[serde(default = "default_bond_denominator")]
    bond_denominator: f64,
    #[serde(default = "default_angle_denominator")]
    angle_denominator: f64,
    #[serde(default = "default_dihedral_denominator")]
    dihedral_denominator: f64,
    #[serde(default = "default_improper_denominator")]
    improper_denominator: f64,
}

impl TryFrom<RawOptGeo> for OptGeoTarget {
    type Error = Error;

    fn try_from(raw: RawOptGeo) -> Result<Self, Self::Error> {
        check_weight(raw.weight)?;
        check_bespoke_tasks(raw.reference_data.as_ref(), Self::TASK_KIND)?;
        Ok(Self {
            weight: raw.weight,
            reference_data: raw.reference_data,
            extras: raw.extras,
            bond_denominator: raw.bond_denominator,
            angle_denominator: raw.angle_denominator,
            dihedral_denominator: raw.dihedral_denominator,
            improper_denominator: raw.improper_denominator,
        })
    }
}

impl Default for OptGeoTarget {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            reference_data: None,
            extras: HashMap::new(),
            bond_denominator: default_bond_denominator(),
            angle_denominator: default_angle_denominator(),
            dihedral_denominator: default_dihedral_denominator(),
            improper_denominator: default_improper_denominator(),
        }
    }
}

impl OptGeoTarget {
    /// The kind of QC task required to generate reference data for this
    /// target.
    pub const TASK_KIND: TaskKind = TaskKind::Optimization;

    pub fn new(weight: f64) -> Result<Self, Error> {
        check_weight(weight)?;
        Ok(Self {
            weight,
            ..Self::default()
        })
    }

    pub fn with_reference_data(mut self, reference: OptimizationReference) -> Result<Self, Error> {
        check_bespoke_tasks(Some(&reference), Self::TASK_KIND)?;
        self.reference_data = Some(reference);
        Ok(self)
    }

    pub fn with_extras(mut self, extras: HashMap<String, String>) -> Self {
        self.extras = extras;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn with_bond_denominator(mut self, denominator: f64) -> Self {
        self.bond_denominator = denominator;
        self
    }

    pub fn with_angle_denominator(mut self, denominator: f64) -> Self {
        self.angle_denominator = denominator;
        self
    }

    pub fn with_dihedral_denominator(mut self, denominator: f64) -> Self {
        self.dihedral_denominator = denominator;
        self
    }

    pub fn with_improper_denominator(mut self, denominator: f64) -> Self {
        self.improper_denominator = denominator;
        self
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn reference_data(&self) -> Option<&OptimizationReference> {
        self.reference_data.as_ref()
    }

    #[inline]
    pub fn extras(&self) -> &HashMap<String, String> {
        &self.extras
    }

    #[inline]
    pub fn bond_denominator(&self) -> f64 {
        self.bond_denominator
    }

    #[inline]
    pub fn angle_denominator(&self) -> f64 {
        self.angle_denominator
    }

    #[inline]
    pub fn dihedral_denominator(&self) -> f64 {
        self.dihedral_denominator
    }

    #[inline]
    pub fn improper_denominator(&self) -> f64 {
        self.improper_denominator
    }
}
