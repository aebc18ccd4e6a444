//! Row-oriented trial tables and their pivoted (wide) forms.

pub mod aggregate;
pub mod join;
pub mod pivot;

pub use aggregate::{AggregateField, aggregate, to_long};
pub use join::outer_join;
pub use pivot::pivot;

/// Column order of every wide table unless overridden on the command line.
pub const DEFAULT_TREATMENTS: [&str; 5] =
    ["Capomulin", "Infubinol", "Ketapril", "Placebo", "Ramicane"];

pub fn default_treatments() -> Vec<String> {
    DEFAULT_TREATMENTS.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRecord {
    pub subject_id: String,
    pub treatment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    pub subject_id: String,
    pub timepoint: u32,
    pub tumor_volume: f64,
    pub metastatic_sites: u32,
}

/// One row of the outer join. Fields of an unmatched side are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub subject_id: String,
    pub treatment: Option<String>,
    pub timepoint: Option<u32>,
    pub tumor_volume: Option<f64>,
    pub metastatic_sites: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRecord {
    pub treatment: String,
    pub timepoint: u32,
    pub tumor_volume_mean: f64,
    pub tumor_volume_sem: f64,
    pub metastatic_sites_mean: f64,
    pub metastatic_sites_sem: f64,
    /// Rows in the group, read as living subjects at this timepoint.
    pub subjects: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub treatment: String,
    pub timepoint: u32,
    pub value: f64,
}

/// Timepoint-indexed table with one column per treatment.
///
/// `cells[row][col]` holds the value for `timepoints[row]` and
/// `treatments[col]`; `None` marks a treatment never observed at that
/// timepoint.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub value_name: String,
    pub timepoints: Vec<u32>,
    pub treatments: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl WideTable {
    pub fn column_index(&self, treatment: &str) -> Option<usize> {
        self.treatments.iter().position(|t| t == treatment)
    }

    pub fn row_index(&self, timepoint: u32) -> Option<usize> {
        self.timepoints.binary_search(&timepoint).ok()
    }

    pub fn get(&self, timepoint: u32, treatment: &str) -> Option<f64> {
        let row = self.row_index(timepoint)?;
        let col = self.column_index(treatment)?;
        self.cells[row][col]
    }

    /// Values of one treatment column, in timepoint order.
    pub fn column(&self, treatment: &str) -> Option<Vec<Option<f64>>> {
        let col = self.column_index(treatment)?;
        Some(self.cells.iter().map(|row| row[col]).collect())
    }

    /// (timepoint, value) pairs of one column, skipping missing cells.
    pub fn present(&self, treatment: &str) -> Vec<(u32, f64)> {
        let Some(col) = self.column_index(treatment) else {
            return Vec::new();
        };
        self.timepoints
            .iter()
            .zip(&self.cells)
            .filter_map(|(tp, row)| row[col].map(|v| (*tp, v)))
            .collect()
    }

    /// Back to long form, dropping missing cells. Sorted by treatment column
    /// order, then timepoint.
    pub fn flatten(&self) -> Vec<LongRecord> {
        let mut out = Vec::new();
        for treatment in &self.treatments {
            for (timepoint, value) in self.present(treatment) {
                out.push(LongRecord {
                    treatment: treatment.clone(),
                    timepoint,
                    value,
                });
            }
        }
        out
    }
}

/// The pivoted aggregate tables produced by the reshape stage.
#[derive(Debug, Clone)]
pub struct ReshapedTables {
    pub tumor_volume_mean: WideTable,
    pub tumor_volume_sem: WideTable,
    pub metastatic_sites_mean: WideTable,
    pub metastatic_sites_sem: WideTable,
    pub subject_count: WideTable,
}

impl ReshapedTables {
    pub fn iter(&self) -> impl Iterator<Item = &WideTable> {
        [
            &self.tumor_volume_mean,
            &self.tumor_volume_sem,
            &self.metastatic_sites_mean,
            &self.metastatic_sites_sem,
            &self.subject_count,
        ]
        .into_iter()
    }
}
