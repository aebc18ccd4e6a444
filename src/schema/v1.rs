use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub subjects_path: String,
    pub observations_path: String,
    pub subjects: Option<u64>,
    pub observations: Option<u64>,
    pub joined_rows: Option<u64>,
    pub unmatched_subjects: Option<u64>,
    pub unmatched_observations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    pub treatment: String,
    /// One entry per timepoint; null for a missing cell or an undefined SEM.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WideTableV1 {
    pub name: String,
    pub timepoints: Vec<u32>,
    pub columns: Vec<TableColumn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthEntry {
    pub treatment: String,
    pub first_timepoint: u32,
    pub last_timepoint: u32,
    pub first_volume: f64,
    pub last_volume: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub treatments: Vec<String>,
    pub tables: Vec<WideTableV1>,
    pub tumor_growth: Vec<GrowthEntry>,
    pub charts: Vec<String>,
    pub warnings: Vec<String>,
}

impl TrialQcV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "kira-trialqc".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                subjects_path: String::new(),
                observations_path: String::new(),
                subjects: None,
                observations: None,
                joined_rows: None,
                unmatched_subjects: None,
                unmatched_observations: None,
            },
            treatments: Vec::new(),
            tables: Vec::new(),
            tumor_growth: Vec::new(),
            charts: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
