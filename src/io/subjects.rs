use std::path::Path;

use anyhow::{Context, Result};

use crate::io::{open_table, parse_error};
use crate::table::SubjectRecord;

pub const SUBJECT_ID_COLUMN: &str = "Mouse ID";
pub const TREATMENT_COLUMN: &str = "Drug";

pub fn read_subjects(path: &Path) -> Result<Vec<SubjectRecord>> {
    let (mut reader, cols) = open_table(path, &[SUBJECT_ID_COLUMN, TREATMENT_COLUMN])?;

    let mut out = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("malformed row in {}", path.display()))?;
        let subject_id = record.get(cols[0]).unwrap_or_default();
        let treatment = record.get(cols[1]).unwrap_or_default();
        if subject_id.is_empty() {
            return Err(parse_error(path, &record, SUBJECT_ID_COLUMN, "empty subject id"));
        }
        if treatment.is_empty() {
            return Err(parse_error(path, &record, TREATMENT_COLUMN, "empty treatment"));
        }
        out.push(SubjectRecord {
            subject_id: subject_id.to_string(),
            treatment: treatment.to_string(),
        });
    }
    Ok(out)
}
