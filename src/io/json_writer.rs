use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{GrowthEntry, InputMeta, TableColumn, TrialQcV1, WideTableV1};
use crate::table::WideTable;

pub fn build_report(ctx: &Ctx) -> Result<TrialQcV1> {
    let input_meta = InputMeta {
        subjects_path: ctx.subjects_path.display().to_string(),
        observations_path: ctx.observations_path.display().to_string(),
        subjects: ctx.input_meta.subjects,
        observations: ctx.input_meta.observations,
        joined_rows: ctx.input_meta.joined_rows,
        unmatched_subjects: ctx.input_meta.unmatched_subjects,
        unmatched_observations: ctx.input_meta.unmatched_observations,
    };

    let reshaped = ctx.tables()?;
    let mut tables: Vec<WideTableV1> = reshaped.iter().map(table_v1).collect();
    tables.push(table_v1(ctx.survival()?));

    let tumor_growth = ctx
        .growth
        .iter()
        .map(|g| GrowthEntry {
            treatment: g.treatment.clone(),
            first_timepoint: g.first_timepoint,
            last_timepoint: g.last_timepoint,
            first_volume: g.first_value,
            last_volume: g.last_value,
            percent_change: g.percent_change,
        })
        .collect();

    let charts = ctx
        .charts
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect();

    Ok(TrialQcV1 {
        input_meta,
        treatments: ctx.treatments.clone(),
        tables,
        tumor_growth,
        charts,
        warnings: ctx.warnings.clone(),
        ..TrialQcV1::empty(&ctx.tool_version)
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

fn table_v1(table: &WideTable) -> WideTableV1 {
    WideTableV1 {
        name: table.value_name.clone(),
        timepoints: table.timepoints.clone(),
        columns: table
            .treatments
            .iter()
            .enumerate()
            .map(|(col, treatment)| TableColumn {
                treatment: treatment.clone(),
                values: table
                    .cells
                    .iter()
                    .map(|row| row[col].filter(|v| v.is_finite()))
                    .collect(),
            })
            .collect(),
    }
}
