use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::Error;
use super::{check_bespoke_tasks, check_weight, default_weight};
use crate::model::data::ReferenceData;
use crate::model::results::TorsionDriveResultCollection;
use crate::model::types::TaskKind;

/// Reference data accepted by torsion based targets: either existing torsion
/// drive results or bespoke torsion scan tasks still to be executed.
pub type TorsionDriveReference = ReferenceData<TorsionDriveResultCollection>;

fn default_energy_denominator() -> f64 {
    1.0
}
fn default_energy_cutoff() -> f64 {
    10.0
}

/// A fitting target that compares force field and QC torsion profile
/// energies.
///
/// Any bespoke reference data attached to this target must consist solely of
/// torsion scan tasks; this is enforced when the target is constructed and
/// when it is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTorsionProfile")]
pub struct TorsionProfileTarget {
    weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_data: Option<TorsionDriveReference>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extras: HashMap<String, String>,
    attenuate_weights: bool,
    energy_denominator: f64,
    energy_cutoff: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTorsionProfile {
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    reference_data: Option<TorsionDriveReference>,
    #[serde(default)]
    extras: HashMap<String, String>,
    #[serde(default = "default_attenuate_weights")]
    attenuate_weights: bool,
    #[serde(default = "default_energy_denominator")]
    energy_denominator: f64,
    #[serde(default = "default_energy_cutoff")]
    energy_cutoff: f64,
}

fn default_attenuate_weights() -> bool {
    true
}

impl TryFrom<RawTorsionProfile> for TorsionProfileTarget {
    type Error = Error;

    fn try_from(raw: RawTorsionProfile) -> Result<Self, Self::Error> {
        check_weight(raw.weight)?;
        check_bespoke_tasks(raw.reference_data.as_ref(), Self::TASK_KIND)?;
        Ok(Self {
            weight: raw.weight,
            reference_data: raw.reference_data,
            extras: raw.extras,
            attenuate_weights: raw.attenuate_weights,
            energy_denominator: raw.energy_denominator,
            energy_cutoff: raw.energy_cutoff,
        })
    }
}

impl Default for TorsionProfileTarget {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            reference_data: None,
            extras: HashMap::new(),
            attenuate_weights: default_attenuate_weights(),
            energy_denominator: default_energy_denominator(),
            energy_cutoff: default_energy_cutoff(),
        }
    }
}

impl TorsionProfileTarget {
    /// The kind of QC task required to generate reference data for this
    /// target.
    pub const TASK_KIND: TaskKind = TaskKind::Torsion1d;

    /// Creates a target with the given objective function weight and
    /// default settings otherwise.
    pub fn new(weight: f64) -> Result<Self, Error> {
        check_weight(weight)?;
        Ok(Self {
            weight,
            ..Self::default()
        })
    }

    /// Attaches reference data, returning a freshly validated target.
    ///
    /// Fails if the data is a bespoke task set containing anything other
    /// than torsion scan tasks.
    pub fn with_reference_data(mut self, reference: TorsionDriveReference) -> Result<Self, Error> {
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

    /// Whether to attenuate per point weights as a function of energy.
    pub fn with_attenuate_weights(mut self, attenuate: bool) -> Self {
        self.attenuate_weights = attenuate;
        self
    }

    pub fn with_energy_denominator(mut self, denominator: f64) -> Self {
        self.energy_denominator = denominator;
        self
    }

    pub fn with_energy_cutoff(mut self, cutoff: f64) -> Self {
        self.energy_cutoff = cutoff;
        self
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn reference_data(&self) -> Option<&TorsionDriveReference> {
        self.reference_data.as_ref()
    }

    #[inline]
    pub fn extras(&self) -> &HashMap<String, String> {
        &self.extras
    }

    #[inline]
    pub fn attenuate_weights(&self) -> bool {
        self.attenuate_weights
    }

    #[inline]
    pub fn energy_denominator(&self) -> f64 {
        self.energy_denominator
    }

    #[inline]
    pub fn energy_cutoff(&self) -> f64 {
        self.energy_cutoff
    }
}

/// A fitting target that fits directly to ab initio energies and,
/// optionally, forces along a torsion scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAbInitio")]
pub struct AbInitioTarget {
    weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_data: Option<TorsionDriveReference>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extras: HashMap<String, String>,
    attenuate_weights: bool,
    energy_denominator: f64,
    energy_cutoff: f64,
    fit_energy: bool,
    fit_force: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAbInitio {
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    reference_data: Option<TorsionDriveReference>,
    #[serde(default)]
    extras: HashMap<String, String>,
    #[serde(default)]
    attenuate_weights: bool,
    #[serde(default = "default_energy_denominator")]
    energy_denominator: f64,
    #[serde(default = "default_energy_cutoff")]
    energy_cutoff: f64,
    #[serde(default = "default_fit_energy")]
    fit_energy: bool,
    #[serde(default)]
    fit_force: bool,
}

fn default_fit_energy() -> bool {
    true
}

impl TryFrom<RawAbInitio> for AbInitioTarget {
    type Error = Error;

    fn try_from(raw: RawAbInitio) -> Result<Self, Self::Error> {
        check_weight(raw.weight)?;
        check_bespoke_tasks(raw.reference_data.as_ref(), Self::TASK_KIND)?;
        Ok(Self {
            weight: raw.weight,
            reference_data: raw.reference_data,
            extras: raw.extras,
            attenuate_weights: raw.attenuate_weights,
            energy_denominator: raw.energy_denominator,
            energy_cutoff: raw.energy_cutoff,
            fit_energy: raw.fit_energy,
            fit_force: raw.fit_force,
        })
    }
}

impl Default for AbInitioTarget {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            reference_data: None,
            extras: HashMap::new(),
            attenuate_weights: false,
            energy_denominator: default_energy_denominator(),
            energy_cutoff: default_energy_cutoff(),
            fit_energy: default_fit_energy(),
            fit_force: false,
        }
    }
}

impl AbInitioTarget {
    /// The kind of QC task required to generate reference data for this
    /// target.
    pub const TASK_KIND: TaskKind = TaskKind::Torsion1d;

    pub fn new(weight: f64) -> Result<Self, Error> {
        check_weight(weight)?;
        Ok(Self {
            weight,
            ..Self::default()
        })
    }

    pub fn with_reference_data(mut self, reference: TorsionDriveReference) -> Result<Self, Error> {
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

    pub fn with_attenuate_weights(mut self, attenuate: bool) -> Self {
        self.attenuate_weights = attenuate;
        self
    }

    pub fn with_energy_denominator(mut self, denominator: f64) -> Self {
        self.energy_denominator = denominator;
        self
    }

    pub fn with_energy_cutoff(mut self, cutoff: f64) -> Self {
        self.energy_cutoff = cutoff;
        self
    }

    pub fn with_fit_energy(mut self, fit: bool) -> Self {
        self.fit_energy = fit;
        self
    }

    pub fn with_fit_force(mut self, fit: bool) -> Self {
        self.fit_force = fit;
        self
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn reference_data(&self) -> Option<&TorsionDriveReference> {
        self.reference_data.as_ref()
    }

    #[inline]
    pub fn extras(&self) -> &HashMap<String, String> {
        &self.extras
    }

    #[inline]
    pub fn attenuate_weights(&self) -> bool {
        self.attenuate_weights
    }

    #[inline]
    pub fn energy_denominator(&self) -> f64 {
        self.energy_denominator
    }

    #[inline]
    pub fn energy_cutoff(&self) -> f64 {
        self.energy_cutoff
    }

    #[inline]
    pub fn fit_energy(&self) -> bool {
        self.fit_energy
    }

    #[inline]
    pub fn fit_force(&self) -> bool {
        self.fit_force
    }
}
