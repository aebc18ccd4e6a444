use std::collections::HashSet;

use kira_trialqc::error::TrialError;
use kira_trialqc::table::{LongRecord, default_treatments, pivot};

fn rec(treatment: &str, timepoint: u32, value: f64) -> LongRecord {
    LongRecord {
        treatment: treatment.to_string(),
        timepoint,
        value,
    }
}

fn sample() -> Vec<LongRecord> {
    vec![
        rec("Ramicane", 5, 40.0),
        rec("Capomulin", 0, 45.0),
        rec("Infubinol", 0, 45.0),
        rec("Ketapril", 0, 45.0),
        rec("Placebo", 0, 45.0),
        rec("Ramicane", 0, 45.0),
        rec("Stelasyn", 0, 45.0),
        rec("Stelasyn", 15, 50.0),
        rec("Capomulin", 10, 39.0),
        rec("Placebo", 5, 47.0),
    ]
}

#[test]
fn rows_sorted_and_columns_fixed() {
    let wide = pivot(&sample(), "tumor_volume_mean", &default_treatments()).unwrap();
    assert_eq!(wide.timepoints, vec![0, 5, 10]);
    assert_eq!(
        wide.treatments,
        vec!["Capomulin", "Infubinol", "Ketapril", "Placebo", "Ramicane"]
    );
    assert_eq!(wide.get(5, "Ramicane"), Some(40.0));
    assert_eq!(wide.get(10, "Capomulin"), Some(39.0));
    assert_eq!(wide.column_index("Stelasyn"), None);
}

#[test]
fn missing_cells_are_none_not_zero() {
    let wide = pivot(&sample(), "v", &default_treatments()).unwrap();
    assert_eq!(wide.get(5, "Capomulin"), None);
    assert_eq!(wide.get(10, "Ramicane"), None);
    assert_eq!(
        wide.column("Infubinol").unwrap(),
        vec![Some(45.0), None, None]
    );
}

#[test]
fn duplicate_key_rejected() {
    let mut records = sample();
    records.push(rec("Placebo", 5, 48.0));
    let err = pivot(&records, "v", &default_treatments()).unwrap_err();
    assert_eq!(
        err,
        TrialError::DuplicateKey {
            treatment: "Placebo".to_string(),
            timepoint: 5
        }
    );
}

#[test]
fn missing_treatment_column_rejected() {
    let records: Vec<LongRecord> = sample()
        .into_iter()
        .filter(|r| r.treatment != "Ketapril")
        .collect();
    let err = pivot(&records, "v", &default_treatments()).unwrap_err();
    assert_eq!(err, TrialError::MissingColumn("Ketapril".to_string()));
}

#[test]
fn flatten_inverts_pivot() {
    let records = sample();
    let treatments = default_treatments();
    let wide = pivot(&records, "v", &treatments).unwrap();

    let expected: HashSet<(String, u32, u64)> = records
        .iter()
        .filter(|r| treatments.contains(&r.treatment))
        .map(|r| (r.treatment.clone(), r.timepoint, r.value.to_bits()))
        .collect();
    let flattened: Vec<LongRecord> = wide.flatten();
    let got: HashSet<(String, u32, u64)> = flattened
        .iter()
        .map(|r| (r.treatment.clone(), r.timepoint, r.value.to_bits()))
        .collect();

    assert_eq!(flattened.len(), got.len());
    assert_eq!(got, expected);
}

#[test]
fn custom_treatment_order() {
    let treatments = vec!["Ramicane".to_string(), "Capomulin".to_string()];
    let wide = pivot(&sample(), "v", &treatments).unwrap();
    assert_eq!(wide.treatments, treatments);
    assert_eq!(wide.cells[0], vec![Some(45.0), Some(45.0)]);
    assert_eq!(wide.timepoints, vec![0, 5, 10]);
}
