use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::scores::GrowthSummary;
use crate::table::WideTable;

/// Writes a wide table with a `Timepoint` key column. Missing cells are left
/// empty; undefined values (SEM of a single subject) are written as `NaN`.
pub fn write_wide_tsv(path: &Path, table: &WideTable) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    ensure_len(table.cells.len(), table.timepoints.len(), &table.value_name)?;

    writeln!(w, "Timepoint\t{}", table.treatments.join("\t"))?;
    for (tp, row) in table.timepoints.iter().zip(&table.cells) {
        ensure_len(row.len(), table.treatments.len(), &table.value_name)?;
        let cells: Vec<String> = row.iter().map(|c| format_cell(*c)).collect();
        writeln!(w, "{}\t{}", tp, cells.join("\t"))?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_growth_tsv(path: &Path, growth: &[GrowthSummary]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "treatment\tfirst_timepoint\tlast_timepoint\tfirst_volume\tlast_volume\tpercent_change"
    )?;
    for g in growth {
        writeln!(
            w,
            "{}\t{}\t{}\t{:.6}\t{:.6}\t{:.2}",
            g.treatment,
            g.first_timepoint,
            g.last_timepoint,
            g.first_value,
            g.last_value,
            g.percent_change
        )?;
    }
    w.flush()?;
    Ok(())
}

fn format_cell(cell: Option<f64>) -> String {
    match cell {
        None => String::new(),
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) => format!("{:.6}", v),
    }
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}
