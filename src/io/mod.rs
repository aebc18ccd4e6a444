use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use flate2::read::GzDecoder;

use crate::error::TrialError;

pub mod json_writer;
pub mod observations;
pub mod subjects;
pub mod summary;
pub mod tsv_writer;

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    if !path.exists() {
        return Err(TrialError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

/// Opens a comma-delimited table and resolves `expected` header names to
/// column positions. Every expected column must be present exactly once and
/// no others may appear; file column order is free.
pub(crate) fn open_table(
    path: &Path,
    expected: &[&str],
) -> Result<(Reader<Box<dyn Read>>, Vec<usize>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(open_maybe_gz(path)?);
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();

    let positions = match resolve_columns(&headers, expected) {
        Some(p) => p,
        None => {
            return Err(TrialError::SchemaMismatch {
                path: path.to_path_buf(),
                expected: expected.iter().map(|s| s.to_string()).collect(),
                found: headers.iter().map(|s| s.to_string()).collect(),
            }
            .into());
        }
    };
    Ok((reader, positions))
}

fn resolve_columns(headers: &StringRecord, expected: &[&str]) -> Option<Vec<usize>> {
    if headers.len() != expected.len() {
        return None;
    }
    let mut positions = Vec::with_capacity(expected.len());
    for name in expected {
        let mut hits = headers.iter().enumerate().filter(|(_, h)| h == name);
        let (idx, _) = hits.next()?;
        if hits.next().is_some() {
            return None;
        }
        positions.push(idx);
    }
    Some(positions)
}

pub(crate) fn parse_error(
    path: &Path,
    record: &StringRecord,
    column: &str,
    message: impl Into<String>,
) -> anyhow::Error {
    TrialError::Parse {
        path: path.to_path_buf(),
        line: record.position().map(|p| p.line()).unwrap_or(0),
        column: column.to_string(),
        message: message.into(),
    }
    .into()
}
