use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A reference to a single record stored in a QC archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultRecord {
    /// The id of the record on the server it lives on.
    pub record_id: String,
    /// The canonical mapped SMILES of the molecule the record refers to.
    pub cmiles: String,
    /// The InChI key of the molecule the record refers to.
    pub inchi_key: String,
}

impl ResultRecord {
    pub fn new(
        record_id: impl Into<String>,
        cmiles: impl Into<String>,
        inchi_key: impl Into<String>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            cmiles: cmiles.into(),
            inchi_key: inchi_key.into(),
        }
    }
}

/// Results of torsion drives, keyed by the address of the server that
/// produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TorsionDriveResultCollection {
    pub entries: HashMap<String, Vec<ResultRecord>>,
}

impl TorsionDriveResultCollection {
    pub fn new(entries: HashMap<String, Vec<ResultRecord>>) -> Self {
        Self { entries }
    }

    pub fn result_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Results of basic single point computations, keyed by the address of the
/// server that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicResultCollection {
    pub entries: HashMap<String, Vec<ResultRecord>>,
}

impl BasicResultCollection {
    pub fn new(entries: HashMap<String, Vec<ResultRecord>>) -> Self {
        Self { entries }
    }

    pub fn result_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Results of geometry optimizations, keyed by the address of the server
/// that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResultCollection {
    pub entries: HashMap<String, Vec<ResultRecord>>,
}

impl OptimizationResultCollection {
    pub fn new(entries: HashMap<String, Vec<ResultRecord>>) -> Self {
        Self { entries }
    }

    pub fn result_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
