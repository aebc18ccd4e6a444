use kira_trialqc::table::{ObservationRecord, SubjectRecord, outer_join};

fn subject(id: &str, treatment: &str) -> SubjectRecord {
    SubjectRecord {
        subject_id: id.to_string(),
        treatment: treatment.to_string(),
    }
}

fn obs(id: &str, timepoint: u32, volume: f64, sites: u32) -> ObservationRecord {
    ObservationRecord {
        subject_id: id.to_string(),
        timepoint,
        tumor_volume: volume,
        metastatic_sites: sites,
    }
}

#[test]
fn matched_rows_carry_both_sides() {
    let subjects = vec![subject("a1", "Capomulin")];
    let observations = vec![obs("a1", 0, 45.0, 0), obs("a1", 5, 44.0, 1)];
    let (rows, warnings) = outer_join(&subjects, &observations);

    assert!(warnings.is_empty());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].treatment.as_deref(), Some("Capomulin"));
    assert_eq!(rows[0].timepoint, Some(0));
    assert_eq!(rows[1].timepoint, Some(5));
    assert_eq!(rows[1].tumor_volume, Some(44.0));
    assert_eq!(rows[1].metastatic_sites, Some(1));
}

#[test]
fn unmatched_rows_kept_from_both_sides() {
    let subjects = vec![subject("a1", "Capomulin"), subject("b1", "Placebo")];
    let observations = vec![obs("a1", 0, 45.0, 0), obs("zz", 0, 45.0, 0)];
    let (rows, warnings) = outer_join(&subjects, &observations);

    assert_eq!(rows.len(), 3);
    let b1 = rows.iter().find(|r| r.subject_id == "b1").unwrap();
    assert_eq!(b1.treatment.as_deref(), Some("Placebo"));
    assert_eq!(b1.timepoint, None);
    assert_eq!(b1.tumor_volume, None);

    let zz = rows.iter().find(|r| r.subject_id == "zz").unwrap();
    assert_eq!(zz.treatment, None);
    assert_eq!(zz.timepoint, Some(0));

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("unknown subject 'zz'"));
}

#[test]
fn duplicate_subject_ids_cross() {
    let subjects = vec![subject("g9", "Stelasyn"), subject("g9", "Propriva")];
    let observations = vec![obs("g9", 0, 45.0, 0), obs("g9", 5, 48.0, 0)];
    let (rows, warnings) = outer_join(&subjects, &observations);

    assert_eq!(rows.len(), 4);
    let stelasyn = rows
        .iter()
        .filter(|r| r.treatment.as_deref() == Some("Stelasyn"))
        .count();
    assert_eq!(stelasyn, 2);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("'g9' is assigned to 2 treatments"));
}

#[test]
fn every_source_row_appears() {
    let subjects = vec![
        subject("a1", "Capomulin"),
        subject("a2", "Capomulin"),
        subject("b1", "Ramicane"),
    ];
    let observations = vec![
        obs("a1", 0, 45.0, 0),
        obs("b1", 0, 45.0, 0),
        obs("b1", 5, 41.0, 0),
        obs("x1", 0, 45.0, 0),
    ];
    let (rows, _) = outer_join(&subjects, &observations);

    // 3 matched observations, 1 orphan observation, 1 subject without data
    assert_eq!(rows.len(), 5);
    for o in &observations {
        assert!(rows.iter().any(|r| r.subject_id == o.subject_id
            && r.timepoint == Some(o.timepoint)
            && r.tumor_volume == Some(o.tumor_volume)));
    }
    for s in &subjects {
        assert!(rows
            .iter()
            .any(|r| r.subject_id == s.subject_id && r.treatment.as_deref() == Some(&s.treatment)));
    }
}
