#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const SUBJECTS_CSV: &str = "Mouse ID,Drug
c1,Capomulin
c2,Capomulin
i1,Infubinol
i2,Infubinol
k1,Ketapril
p1,Placebo
p2,Placebo
r1,Ramicane
r2,Ramicane
s1,Stelasyn
";

// c2 and p2 drop out after day 5.
pub const OBSERVATIONS_CSV: &str = "Mouse ID,Timepoint,Tumor Volume (mm3),Metastatic Sites
c1,0,45.0,0
c2,0,45.0,0
i1,0,45.0,0
i2,0,45.0,0
k1,0,45.0,0
p1,0,45.0,0
p2,0,45.0,0
r1,0,45.0,0
r2,0,45.0,0
s1,0,45.0,0
c1,5,43.0,0
c2,5,41.0,1
i1,5,47.0,1
i2,5,49.0,1
k1,5,50.0,1
p1,5,48.0,0
p2,5,50.0,2
r1,5,40.0,0
r2,5,42.0,0
s1,5,46.0,0
c1,10,40.0,1
i1,10,50.0,2
i2,10,52.0,1
k1,10,55.0,2
p1,10,52.0,1
r1,10,36.0,0
r2,10,36.0,1
s1,10,47.0,1
";

pub fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let subjects = dir.join("mouse_drug_data.csv");
    let observations = dir.join("clinicaltrial_data.csv");
    fs::write(&subjects, SUBJECTS_CSV).unwrap();
    fs::write(&observations, OBSERVATIONS_CSV).unwrap();
    (subjects, observations)
}

pub fn assert_close(got: f64, expected: f64) {
    assert!(
        (got - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        got
    );
}
