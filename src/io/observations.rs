use std::path::Path;

use anyhow::{Context, Result};

use crate::io::{open_table, parse_error};
use crate::table::ObservationRecord;

pub const SUBJECT_ID_COLUMN: &str = "Mouse ID";
pub const TIMEPOINT_COLUMN: &str = "Timepoint";
pub const TUMOR_VOLUME_COLUMN: &str = "Tumor Volume (mm3)";
pub const METASTATIC_SITES_COLUMN: &str = "Metastatic Sites";

pub fn read_observations(path: &Path) -> Result<Vec<ObservationRecord>> {
    let (mut reader, cols) = open_table(
        path,
        &[
            SUBJECT_ID_COLUMN,
            TIMEPOINT_COLUMN,
            TUMOR_VOLUME_COLUMN,
            METASTATIC_SITES_COLUMN,
        ],
    )?;

    let mut out = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("malformed row in {}", path.display()))?;
        let field = |i: usize| record.get(cols[i]).unwrap_or_default();

        let subject_id = field(0);
        if subject_id.is_empty() {
            return Err(parse_error(path, &record, SUBJECT_ID_COLUMN, "empty subject id"));
        }
        let timepoint: u32 = field(1).parse().map_err(|_| {
            parse_error(
                path,
                &record,
                TIMEPOINT_COLUMN,
                format!("'{}' is not a non-negative integer", field(1)),
            )
        })?;
        let tumor_volume: f64 = field(2).parse().map_err(|_| {
            parse_error(
                path,
                &record,
                TUMOR_VOLUME_COLUMN,
                format!("'{}' is not a number", field(2)),
            )
        })?;
        if !tumor_volume.is_finite() || tumor_volume < 0.0 {
            return Err(parse_error(
                path,
                &record,
                TUMOR_VOLUME_COLUMN,
                format!("volume {} out of range", tumor_volume),
            ));
        }
        let metastatic_sites: u32 = field(3).parse().map_err(|_| {
            parse_error(
                path,
                &record,
                METASTATIC_SITES_COLUMN,
                format!("'{}' is not a non-negative integer", field(3)),
            )
        })?;

        out.push(ObservationRecord {
            subject_id: subject_id.to_string(),
            timepoint,
            tumor_volume,
            metastatic_sites,
        });
    }
    Ok(out)
}
