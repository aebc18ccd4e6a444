use std::collections::{BTreeMap, HashMap, HashSet};

use crate::table::{JoinedRecord, ObservationRecord, SubjectRecord};

/// Full outer join of subjects and observations on subject id.
///
/// Subjects are emitted in input order, each followed by its matching
/// observations in input order (one row per pair, so duplicate ids cross).
/// Subjects without observations and observations without a subject are kept
/// with the other side left empty. Ambiguous assignments and orphaned
/// observations are returned as warnings.
pub fn outer_join(
    subjects: &[SubjectRecord],
    observations: &[ObservationRecord],
) -> (Vec<JoinedRecord>, Vec<String>) {
    let mut obs_by_subject: HashMap<&str, Vec<&ObservationRecord>> = HashMap::new();
    for obs in observations {
        obs_by_subject
            .entry(obs.subject_id.as_str())
            .or_default()
            .push(obs);
    }

    let mut rows = Vec::with_capacity(observations.len() + subjects.len());
    let mut known: HashSet<&str> = HashSet::new();
    let mut treatments_by_subject: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for subject in subjects {
        known.insert(subject.subject_id.as_str());
        let seen = treatments_by_subject
            .entry(subject.subject_id.as_str())
            .or_default();
        if !seen.contains(&subject.treatment.as_str()) {
            seen.push(subject.treatment.as_str());
        }

        match obs_by_subject.get(subject.subject_id.as_str()) {
            Some(matched) => {
                for obs in matched {
                    rows.push(JoinedRecord {
                        subject_id: subject.subject_id.clone(),
                        treatment: Some(subject.treatment.clone()),
                        timepoint: Some(obs.timepoint),
                        tumor_volume: Some(obs.tumor_volume),
                        metastatic_sites: Some(obs.metastatic_sites),
                    });
                }
            }
            None => rows.push(JoinedRecord {
                subject_id: subject.subject_id.clone(),
                treatment: Some(subject.treatment.clone()),
                timepoint: None,
                tumor_volume: None,
                metastatic_sites: None,
            }),
        }
    }

    let mut orphans: BTreeMap<&str, usize> = BTreeMap::new();
    for obs in observations {
        if known.contains(obs.subject_id.as_str()) {
            continue;
        }
        *orphans.entry(obs.subject_id.as_str()).or_default() += 1;
        rows.push(JoinedRecord {
            subject_id: obs.subject_id.clone(),
            treatment: None,
            timepoint: Some(obs.timepoint),
            tumor_volume: Some(obs.tumor_volume),
            metastatic_sites: Some(obs.metastatic_sites),
        });
    }

    let mut warnings = Vec::new();
    for (subject_id, treatments) in &treatments_by_subject {
        if treatments.len() > 1 {
            warnings.push(format!(
                "subject '{}' is assigned to {} treatments ({}); its observations are counted under each",
                subject_id,
                treatments.len(),
                treatments.join(", ")
            ));
        }
    }
    for (subject_id, count) in &orphans {
        warnings.push(format!(
            "{} observation(s) reference unknown subject '{}'",
            count, subject_id
        ));
    }

    (rows, warnings)
}
