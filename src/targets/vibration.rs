use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::Error;
use super::{check_bespoke_tasks, check_weight, default_weight};
use crate::model::data::ReferenceData;
use crate::model::results::BasicResultCollection;
use crate::model::types::{ModeReassignment, TaskKind};

/// Reference data accepted by vibration targets: either existing single
/// point results or bespoke Hessian tasks still to be executed.
pub type BasicReference = ReferenceData<BasicResultCollection>;

/// A fitting target that compares force field and QC vibrational
/// frequencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVibration")]
pub struct VibrationTarget {
    weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_data: Option<BasicReference>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extras: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode_reassignment: Option<ModeReassignment>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVibration {
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    reference_data: Option<BasicReference>,
    #[serde(default)]
    extras: HashMap<String, String>,
    #[serde(default)]
    mode_reassignment: Option<ModeReassignment>,
}

impl TryFrom<RawVibration> for VibrationTarget {
    type Error = Error;

    fn try_from(raw: RawVibration) -> Result<Self, Self::Error> {
        check_weight(raw.weight)?;
        check_bespoke_tasks(raw.reference_data.as_ref(), Self::TASK_KIND)?;
        Ok(Self {
            weight: raw.weight,
            reference_data: raw.reference_data,
            extras: raw.extras,
            mode_reassignment: raw.mode_reassignment,
        })
    }
}

impl Default for VibrationTarget {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            reference_data: None,
            extras: HashMap::new(),
            mode_reassignment: None,
        }
    }
}

impl VibrationTarget {
    /// The kind of QC task required to generate reference data for this
    /// target.
    pub const TASK_KIND: TaskKind = TaskKind::Hessian;

    pub fn new(weight: f64) -> Result<Self, Error> {
        check_weight(weight)?;
        Ok(Self {
            weight,
            ..Self::default()
        })
    }

    pub fn with_reference_data(mut self, reference: BasicReference) -> Result<Self, Error> {
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

    pub fn with_mode_reassignment(mut self, mode: ModeReassignment) -> Self {
        self.mode_reassignment = Some(mode);
        self
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn reference_data(&self) -> Option<&BasicReference> {
        self.reference_data.as_ref()
    }

    #[inline]
    pub fn extras(&self) -> &HashMap<String, String> {
        &self.extras
    }

    #[inline]
    pub fn mode_reassignment(&self) -> Option<ModeReassignment> {
        self.mode_reassignment
    }
}
