mod error;
mod opt_geo;
mod torsion;
mod vibration;

pub use error::Error;
pub use opt_geo::{OptGeoTarget, OptimizationReference};
pub use torsion::{AbInitioTarget, TorsionDriveReference, TorsionProfileTarget};
pub use vibration::{BasicReference, VibrationTarget};

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::model::data::{BespokeQcData, ReferenceData};
use crate::model::types::TaskKind;

const DEFAULT_TARGETS_TOML: &str = include_str!("../../resources/default.targets.toml");

static DEFAULT_TARGETS: OnceLock<Vec<TargetSchema>> = OnceLock::new();

/// One fitting target declaration: the closed union of all target variants.
///
/// Serialized forms are discriminated by a `type` field naming the variant,
/// which is required to pick the right variant before field validation runs
/// since the variants are not distinguishable by field shape alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TargetSchema {
    TorsionProfile(TorsionProfileTarget),
    AbInitio(AbInitioTarget),
    Vibration(VibrationTarget),
    OptGeo(OptGeoTarget),
}

impl TargetSchema {
    /// The kind of QC task that must be executed to generate reference data
    /// for this target.
    pub fn task_kind(&self) -> TaskKind {
        match self {
            TargetSchema::TorsionProfile(_) => TorsionProfileTarget::TASK_KIND,
            TargetSchema::AbInitio(_) => AbInitioTarget::TASK_KIND,
            TargetSchema::Vibration(_) => VibrationTarget::TASK_KIND,
            TargetSchema::OptGeo(_) => OptGeoTarget::TASK_KIND,
        }
    }

    /// The discriminator this variant serializes under.
    pub fn type_name(&self) -> &'static str {
        match self {
            TargetSchema::TorsionProfile(_) => "TorsionProfile",
            TargetSchema::AbInitio(_) => "AbInitio",
            TargetSchema::Vibration(_) => "Vibration",
            TargetSchema::OptGeo(_) => "OptGeo",
        }
    }

    /// The relative contribution of this target to the objective function.
    pub fn weight(&self) -> f64 {
        match self {
            TargetSchema::TorsionProfile(t) => t.weight(),
            TargetSchema::AbInitio(t) => t.weight(),
            TargetSchema::Vibration(t) => t.weight(),
            TargetSchema::OptGeo(t) => t.weight(),
        }
    }

    /// Optimizer specific pass-through settings.
    pub fn extras(&self) -> &HashMap<String, String> {
        match self {
            TargetSchema::TorsionProfile(t) => t.extras(),
            TargetSchema::AbInitio(t) => t.extras(),
            TargetSchema::Vibration(t) => t.extras(),
            TargetSchema::OptGeo(t) => t.extras(),
        }
    }

    /// The bespoke task set attached as reference data, if any.
    ///
    /// Returns `None` both when no reference data is attached and when the
    /// attached data is an already-computed collection.
    pub fn bespoke_data(&self) -> Option<&BespokeQcData> {
        match self {
            TargetSchema::TorsionProfile(t) => {
                t.reference_data().and_then(ReferenceData::as_bespoke)
            }
            TargetSchema::AbInitio(t) => t.reference_data().and_then(ReferenceData::as_bespoke),
            TargetSchema::Vibration(t) => t.reference_data().and_then(ReferenceData::as_bespoke),
            TargetSchema::OptGeo(t) => t.reference_data().and_then(ReferenceData::as_bespoke),
        }
    }

    /// Parses a target schema from its JSON form, validating all fields and
    /// the task kind invariant.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<TorsionProfileTarget> for TargetSchema {
    fn from(target: TorsionProfileTarget) -> Self {
        TargetSchema::TorsionProfile(target)
    }
}

impl From<AbInitioTarget> for TargetSchema {
    fn from(target: AbInitioTarget) -> Self {
        TargetSchema::AbInitio(target)
    }
}

impl From<VibrationTarget> for TargetSchema {
    fn from(target: VibrationTarget) -> Self {
        TargetSchema::Vibration(target)
    }
}

impl From<OptGeoTarget> for TargetSchema {
    fn from(target: OptGeoTarget) -> Self {
        TargetSchema::OptGeo(target)
    }
}

#[derive(Deserialize)]
struct TargetFile {
    targets: Vec<TargetSchema>,
}

/// Loads a target set from a TOML document, or the built-in default set
/// when no document is given.
pub fn load_targets(custom_toml: Option<&str>) -> Result<Vec<TargetSchema>, Error> {
    match custom_toml {
        Some(toml) => {
            let file: TargetFile = toml::from_str(toml)?;
            Ok(file.targets)
        }
        None => Ok(default_targets().to_vec()),
    }
}

/// The default fitting target set: a single torsion profile target with
/// stock settings.
pub fn default_targets() -> &'static [TargetSchema] {
    DEFAULT_TARGETS.get_or_init(|| {
        let file: TargetFile = toml::from_str(DEFAULT_TARGETS_TOML)
            .expect("Failed to parse embedded default targets. This is a library bug.");
        file.targets
    })
}

pub(crate) fn default_weight() -> f64 {
    1.0
}

pub(crate) fn check_weight(weight: f64) -> Result<(), Error> {
    if weight > 0.0 {
        Ok(())
    } else {
        Err(Error::NonPositiveWeight(weight))
    }
}

/// Checks every task in a bespoke reference set against the kind a target
/// variant requires.
///
/// Only bespoke task sets are kind checked; existing collections are
/// already typed per target and pass through untouched.
pub(crate) fn check_bespoke_tasks<C>(
    reference: Option<&ReferenceData<C>>,
    expected: TaskKind,
) -> Result<(), Error> {
    let Some(data) = reference.and_then(|r| r.as_bespoke()) else {
        return Ok(());
    };

    let mismatched: Vec<String> = data
        .tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.task_kind() != expected)
        .map(|(index, task)| format!("task {index} is '{}'", task.task_kind()))
        .collect();

    if mismatched.is_empty() {
        Ok(())
    } else {
        Err(Error::task_kind_mismatch(expected, mismatched.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::data::QcTask;
    use crate::model::results::BasicResultCollection;
    use crate::model::types::ModeReassignment;

    fn torsion_task(smiles: &str) -> QcTask {
        QcTask::Torsion1d {
            smiles: smiles.to_string(),
            central_bond: (0, 1),
        }
    }

    #[test]
    fn task_kind_per_variant() {
        let schemas: [TargetSchema; 4] = [
            TorsionProfileTarget::default().into(),
            AbInitioTarget::default().into(),
            VibrationTarget::default().into(),
            OptGeoTarget::default().into(),
        ];
        let kinds: Vec<TaskKind> = schemas.iter().map(TargetSchema::task_kind).collect();
        assert_eq!(
            kinds,
            vec![
                TaskKind::Torsion1d,
                TaskKind::Torsion1d,
                TaskKind::Hessian,
                TaskKind::Optimization,
            ]
        );
    }

    #[test]
    fn serialized_form_carries_discriminator() {
        let schema = TargetSchema::from(VibrationTarget::default());
        assert_eq!(schema.type_name(), "Vibration");

        let json = schema.to_json().unwrap();
        assert!(json.contains(r#""type":"Vibration""#));
    }

    #[test]
    fn unknown_discriminator_is_rejected() {
        let err = TargetSchema::from_json(r#"{"type":"Bonded","weight":1.0}"#).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));

        let err = TargetSchema::from_json(r#"{"weight":1.0}"#).unwrap_err();
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn every_variant_roundtrips_through_the_union() {
        let schemas: [TargetSchema; 4] = [
            TorsionProfileTarget::new(2.0)
                .unwrap()
                .with_reference_data(TorsionDriveReference::Bespoke(BespokeQcData::new(vec![
                    torsion_task("CCO"),
                ])))
                .unwrap()
                .into(),
            AbInitioTarget::new(1.0)
                .unwrap()
                .with_fit_force(true)
                .into(),
            VibrationTarget::new(0.5)
                .unwrap()
                .with_mode_reassignment(ModeReassignment::Overlap)
                .into(),
            OptGeoTarget::new(3.0)
                .unwrap()
                .with_extra("remote", "1")
                .into(),
        ];

        for schema in schemas {
            let json = schema.to_json().unwrap();
            let restored = TargetSchema::from_json(&json).unwrap();
            assert_eq!(schema, restored);
        }
    }

    #[test]
    fn minimal_documents_deserialize_with_defaults() {
        let schema = TargetSchema::from_json(r#"{"type":"AbInitio"}"#).unwrap();
        assert_eq!(schema, TargetSchema::AbInitio(AbInitioTarget::default()));

        let schema = TargetSchema::from_json(r#"{"type":"OptGeo"}"#).unwrap();
        assert_eq!(schema, TargetSchema::OptGeo(OptGeoTarget::default()));
    }

    #[test]
    fn union_deserialization_runs_field_validation() {
        let err =
            TargetSchema::from_json(r#"{"type":"TorsionProfile","weight":-1.0}"#).unwrap_err();
        assert!(err.to_string().contains("must be a positive number"));

        let doc = r#"{
            "type": "Vibration",
            "reference_data": {
                "tasks": [{"task_type": "torsion1d", "smiles": "CCO", "central_bond": [0, 1]}]
            }
        }"#;
        let err = TargetSchema::from_json(doc).unwrap_err();
        assert!(err.to_string().contains("kind 'hessian'"));
    }

    #[test]
    fn union_accessors_read_common_fields() {
        let schema = TargetSchema::from(
            OptGeoTarget::new(4.0)
                .unwrap()
                .with_extra("openff.forcebalance/remote", "true"),
        );
        assert_eq!(schema.weight(), 4.0);
        assert_eq!(
            schema
                .extras()
                .get("openff.forcebalance/remote")
                .map(String::as_str),
            Some("true")
        );
        assert!(schema.bespoke_data().is_none());
    }

    #[test]
    fn bespoke_data_is_visible_across_the_union() {
        let tasks = BespokeQcData::new(vec![QcTask::Hessian {
            smiles: "CCO".to_string(),
        }]);
        let schema = TargetSchema::from(
            VibrationTarget::new(1.0)
                .unwrap()
                .with_reference_data(BasicReference::Bespoke(tasks))
                .unwrap(),
        );
        assert_eq!(schema.bespoke_data().unwrap().task_count(), 1);

        let existing = TargetSchema::from(
            VibrationTarget::new(1.0)
                .unwrap()
                .with_reference_data(BasicReference::Existing(BasicResultCollection::default()))
                .unwrap(),
        );
        assert!(existing.bespoke_data().is_none());
    }

    #[test]
    fn torsion_profile_end_to_end() {
        let tasks = BespokeQcData::new(vec![torsion_task("CCO"), torsion_task("CCCC")]);
        let target = TorsionProfileTarget::new(2.0)
            .unwrap()
            .with_reference_data(TorsionDriveReference::Bespoke(tasks))
            .unwrap();
        let schema = TargetSchema::from(target);

        assert_eq!(schema.task_kind(), TaskKind::Torsion1d);
        assert_eq!(schema.weight(), 2.0);
        assert_eq!(schema.bespoke_data().unwrap().task_count(), 2);

        let mixed = BespokeQcData::new(vec![
            torsion_task("CCO"),
            QcTask::Hessian {
                smiles: "CCCC".to_string(),
            },
        ]);
        let err = TorsionProfileTarget::new(2.0)
            .unwrap()
            .with_reference_data(TorsionDriveReference::Bespoke(mixed))
            .unwrap_err();
        assert!(err.to_string().contains("'torsion1d'"));
    }

    #[test]
    fn default_targets_load_stock_torsion_profile() {
        let targets = default_targets();
        assert_eq!(targets.len(), 1);

        let TargetSchema::TorsionProfile(target) = &targets[0] else {
            panic!("default target set should contain a torsion profile target");
        };
        assert_eq!(target.weight(), 1.0);
        assert!(target.attenuate_weights());
        assert_eq!(target.energy_cutoff(), 10.0);
        assert!(target.reference_data().is_none());
    }

    #[test]
    fn load_targets_none_matches_defaults() {
        let targets = load_targets(None).unwrap();
        assert_eq!(targets, default_targets().to_vec());
    }

    #[test]
    fn custom_targets_parse_valid_toml() {
        let custom = r#"
            [[targets]]
            type = "Vibration"
            weight = 0.5
            mode_reassignment = "permute"

            [[targets]]
            type = "OptGeo"
        "#;
        let targets = load_targets(Some(custom)).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].task_kind(), TaskKind::Hessian);
        assert_eq!(targets[0].weight(), 0.5);
        assert_eq!(targets[1], TargetSchema::OptGeo(OptGeoTarget::default()));
    }

    #[test]
    fn errors_on_invalid_custom_toml() {
        let invalid = "not valid [[[toml";
        assert!(load_targets(Some(invalid)).is_err());

        let bad_weight = r#"
            [[targets]]
            type = "TorsionProfile"
            weight = -1.0
        "#;
        assert!(load_targets(Some(bad_weight)).is_err());
    }
}
