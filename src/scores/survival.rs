use crate::error::TrialError;
use crate::table::WideTable;

/// Converts a subject-count table into percent of the initial cohort.
///
/// The cohort of each treatment is its count at timepoint 0. A treatment with
/// no subjects at timepoint 0 has no denominator and fails the run.
pub fn survival_percent(counts: &WideTable) -> Result<WideTable, TrialError> {
    let mut cohorts = Vec::with_capacity(counts.treatments.len());
    for treatment in &counts.treatments {
        match counts.get(0, treatment) {
            Some(n) if n > 0.0 => cohorts.push(n),
            _ => {
                return Err(TrialError::DivisionByZero {
                    what: "survival rate",
                    treatment: treatment.clone(),
                });
            }
        }
    }

    let cells = counts
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(&cohorts)
                .map(|(cell, cohort)| cell.map(|n| n / cohort * 100.0))
                .collect()
        })
        .collect();

    Ok(WideTable {
        value_name: "survival_percent".to_string(),
        timepoints: counts.timepoints.clone(),
        treatments: counts.treatments.clone(),
        cells,
    })
}
