use std::fs;

use kira_trialqc::figures::{BarSign, generate_growth_bars, generate_time_series, growth_bars};
use kira_trialqc::scores::GrowthSummary;
use kira_trialqc::table::WideTable;
use tempfile::TempDir;

fn growth(treatment: &str, pct: f64) -> GrowthSummary {
    GrowthSummary {
        treatment: treatment.to_string(),
        first_timepoint: 0,
        last_timepoint: 45,
        first_value: 45.0,
        last_value: 45.0 * (1.0 + pct / 100.0),
        percent_change: pct,
    }
}

#[test]
fn bars_follow_sign_and_order() {
    let g = vec![
        growth("Capomulin", -19.48),
        growth("Ketapril", 57.03),
        growth("Ramicane", -22.32),
    ];
    let (bars, (lo, hi)) = growth_bars(&g);

    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].sign, BarSign::Shrinkage);
    assert_eq!(bars[1].sign, BarSign::Growth);
    assert_eq!(bars[1].label, "57.03%");
    assert_eq!(bars[2].index, 2);
    assert!(bars[1].label_y > bars[1].value);
    assert!(bars[2].label_y < bars[2].value);
    assert!(lo < -22.32 && hi > 57.03);
}

#[test]
fn range_always_spans_zero() {
    let (_, (lo, hi)) = growth_bars(&[growth("Ketapril", 10.0)]);
    assert!(lo < 0.0);
    assert!(hi > 10.0);
}

#[test]
fn charts_written_as_svg() {
    let tmp = TempDir::new().unwrap();
    let values = WideTable {
        value_name: "tumor_volume_mean".to_string(),
        timepoints: vec![0, 5, 10],
        treatments: vec!["Capomulin".to_string(), "Placebo".to_string()],
        cells: vec![
            vec![Some(45.0), Some(45.0)],
            vec![Some(42.0), Some(48.0)],
            vec![Some(40.0), None],
        ],
    };
    let mut errors = values.clone();
    errors.cells = vec![
        vec![Some(0.0), Some(0.0)],
        vec![Some(1.0), Some(f64::NAN)],
        vec![Some(f64::NAN), None],
    ];

    let series = tmp.path().join("series.svg");
    generate_time_series(&series, "Tumor", "Volume", &values, Some(&errors)).unwrap();
    let svg = fs::read_to_string(&series).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Capomulin"));

    let bars = tmp.path().join("bars.svg");
    generate_growth_bars(&bars, &[growth("Capomulin", -11.11), growth("Placebo", 6.67)])
        .unwrap();
    let svg = fs::read_to_string(&bars).unwrap();
    assert!(svg.contains("-11.11%"));
    assert!(svg.contains("6.67%"));
}
