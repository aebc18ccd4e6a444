use std::collections::{BTreeSet, HashSet};

use crate::error::TrialError;
use crate::table::{LongRecord, WideTable};

/// Pivots long triples into a timepoint x treatment table.
///
/// Columns follow `treatments` exactly; records for other treatments are
/// dropped. Rows are the ascending timepoints observed for the kept
/// treatments.
pub fn pivot(
    records: &[LongRecord],
    value_name: &str,
    treatments: &[String],
) -> Result<WideTable, TrialError> {
    let mut seen: HashSet<(&str, u32)> = HashSet::with_capacity(records.len());
    for rec in records {
        if !seen.insert((rec.treatment.as_str(), rec.timepoint)) {
            return Err(TrialError::DuplicateKey {
                treatment: rec.treatment.clone(),
                timepoint: rec.timepoint,
            });
        }
    }

    for treatment in treatments {
        if !records.iter().any(|r| &r.treatment == treatment) {
            return Err(TrialError::MissingColumn(treatment.clone()));
        }
    }

    let kept: Vec<(usize, &LongRecord)> = records
        .iter()
        .filter_map(|r| {
            treatments
                .iter()
                .position(|t| t == &r.treatment)
                .map(|col| (col, r))
        })
        .collect();

    let timepoints: Vec<u32> = kept
        .iter()
        .map(|(_, r)| r.timepoint)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells = vec![vec![None; treatments.len()]; timepoints.len()];
    for (col, rec) in kept {
        // timepoints was built from these same records
        if let Ok(row) = timepoints.binary_search(&rec.timepoint) {
            cells[row][col] = Some(rec.value);
        }
    }

    Ok(WideTable {
        value_name: value_name.to_string(),
        timepoints,
        treatments: treatments.to_vec(),
        cells,
    })
}
