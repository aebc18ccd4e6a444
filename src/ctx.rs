use std::path::PathBuf;

use crate::scores::GrowthSummary;
use crate::table::{
    AggregateRecord, JoinedRecord, ObservationRecord, ReshapedTables, SubjectRecord, WideTable,
};

pub const TUMOR_RESPONSE_CHART: &str = "Tumor_Response_to_Treatment.svg";
pub const METASTATIC_SPREAD_CHART: &str = "Metastatic_Site_Spread.svg";
pub const SURVIVAL_RATE_CHART: &str = "Survival_Rate.svg";
pub const TUMOR_GROWTH_CHART: &str = "Tumor_Growth_bar_chart.svg";

#[derive(Debug, Clone, Default)]
pub struct InputMeta {
    pub subjects: Option<u64>,
    pub observations: Option<u64>,
    pub joined_rows: Option<u64>,
    pub unmatched_subjects: Option<u64>,
    pub unmatched_observations: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tumor_response_chart: PathBuf,
    pub metastatic_spread_chart: PathBuf,
    pub survival_rate_chart: PathBuf,
    pub tumor_growth_chart: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            json_path: out_dir.join("trialqc.json"),
            tumor_response_chart: out_dir.join(TUMOR_RESPONSE_CHART),
            metastatic_spread_chart: out_dir.join(METASTATIC_SPREAD_CHART),
            survival_rate_chart: out_dir.join(SURVIVAL_RATE_CHART),
            tumor_growth_chart: out_dir.join(TUMOR_GROWTH_CHART),
            out_dir,
        }
    }

    pub fn tsv_path(&self, value_name: &str) -> PathBuf {
        self.out_dir.join(format!("{}.tsv", value_name))
    }
}

/// Run context threaded through every pipeline stage. Each stage fills in the
/// tables it derives; nothing is rewritten once set.
#[derive(Debug)]
pub struct Ctx {
    pub subjects_path: PathBuf,
    pub observations_path: PathBuf,
    pub treatments: Vec<String>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub tool_version: String,
    pub subjects: Vec<SubjectRecord>,
    pub observations: Vec<ObservationRecord>,
    pub joined: Vec<JoinedRecord>,
    pub aggregates: Vec<AggregateRecord>,
    pub tables: Option<ReshapedTables>,
    pub survival: Option<WideTable>,
    pub growth: Vec<GrowthSummary>,
    pub charts: Vec<PathBuf>,
    pub warnings: Vec<String>,
    pub input_meta: InputMeta,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        subjects_path: PathBuf,
        observations_path: PathBuf,
        out_dir: PathBuf,
        treatments: Vec<String>,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        Self {
            subjects_path,
            observations_path,
            treatments,
            write_json,
            write_tsv,
            tool_version: tool_version.to_string(),
            subjects: Vec::new(),
            observations: Vec::new(),
            joined: Vec::new(),
            aggregates: Vec::new(),
            tables: None,
            survival: None,
            growth: Vec::new(),
            charts: Vec::new(),
            warnings: Vec::new(),
            input_meta: InputMeta::default(),
            output: OutputPaths::new(out_dir),
        }
    }

    pub fn tables(&self) -> anyhow::Result<&ReshapedTables> {
        self.tables
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("reshaped tables missing"))
    }

    pub fn survival(&self) -> anyhow::Result<&WideTable> {
        self.survival
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("survival table missing"))
    }
}
