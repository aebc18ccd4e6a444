mod common;

use std::fs;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

const CHARTS: [&str; 4] = [
    "Tumor_Response_to_Treatment.svg",
    "Metastatic_Site_Spread.svg",
    "Survival_Rate.svg",
    "Tumor_Growth_bar_chart.svg",
];

#[test]
fn run_writes_charts_and_exports() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let (subjects, observations) = common::write_inputs(tmp.path());

    let mut cmd = Command::cargo_bin("kira-trialqc").unwrap();
    cmd.args(["run", "--json", "--tsv"])
        .arg("--subjects")
        .arg(&subjects)
        .arg("--observations")
        .arg(&observations)
        .arg("--out")
        .arg(out.path());
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("Charts: 4"));

    for name in CHARTS {
        assert!(out.path().join(name).is_file(), "missing {}", name);
    }
    for name in [
        "tumor_volume_mean.tsv",
        "tumor_volume_sem.tsv",
        "metastatic_sites_mean.tsv",
        "metastatic_sites_sem.tsv",
        "subject_count.tsv",
        "survival_percent.tsv",
        "tumor_growth.tsv",
    ] {
        assert!(out.path().join(name).is_file(), "missing {}", name);
    }

    let v: Value =
        serde_json::from_slice(&fs::read(out.path().join("trialqc.json")).unwrap()).unwrap();
    assert_eq!(v["charts"].as_array().unwrap().len(), 4);
    assert_eq!(v["charts"][3], "Tumor_Growth_bar_chart.svg");
}

#[test]
fn run_outputs_are_deterministic() {
    let tmp = TempDir::new().unwrap();
    let (subjects, observations) = common::write_inputs(tmp.path());
    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();

    for out in [&out1, &out2] {
        let mut cmd = Command::cargo_bin("kira-trialqc").unwrap();
        cmd.args(["run", "--tsv"])
            .arg("--subjects")
            .arg(&subjects)
            .arg("--observations")
            .arg(&observations)
            .arg("--out")
            .arg(out.path());
        cmd.assert().success();
    }

    for name in ["tumor_volume_mean.tsv", "survival_percent.tsv", "tumor_growth.tsv"] {
        let a = fs::read(out1.path().join(name)).unwrap();
        let b = fs::read(out2.path().join(name)).unwrap();
        assert_eq!(a, b, "mismatch in {}", name);
    }
}

#[test]
fn missing_input_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-trialqc").unwrap();
    cmd.arg("validate")
        .arg("--subjects")
        .arg(tmp.path().join("absent.csv"))
        .arg("--observations")
        .arg(tmp.path().join("absent2.csv"));
    cmd.assert().failure();
}

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    let (subjects, observations) = common::write_inputs(tmp.path());
    let mut cmd = Command::cargo_bin("kira-trialqc").unwrap();
    cmd.arg("validate")
        .arg("--subjects")
        .arg(&subjects)
        .arg("--observations")
        .arg(&observations);
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("kira-trialqc validate ok"));
    assert!(stdout.contains("groups: 18"));
}
