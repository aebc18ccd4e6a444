use std::collections::BTreeMap;

use crate::math::stats::{mean, sem};
use crate::table::{AggregateRecord, JoinedRecord, LongRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateField {
    TumorVolumeMean,
    TumorVolumeSem,
    MetastaticSitesMean,
    MetastaticSitesSem,
    SubjectCount,
}

impl AggregateField {
    pub const ALL: [AggregateField; 5] = [
        AggregateField::TumorVolumeMean,
        AggregateField::TumorVolumeSem,
        AggregateField::MetastaticSitesMean,
        AggregateField::MetastaticSitesSem,
        AggregateField::SubjectCount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AggregateField::TumorVolumeMean => "tumor_volume_mean",
            AggregateField::TumorVolumeSem => "tumor_volume_sem",
            AggregateField::MetastaticSitesMean => "metastatic_sites_mean",
            AggregateField::MetastaticSitesSem => "metastatic_sites_sem",
            AggregateField::SubjectCount => "subject_count",
        }
    }

    pub fn value(self, rec: &AggregateRecord) -> f64 {
        match self {
            AggregateField::TumorVolumeMean => rec.tumor_volume_mean,
            AggregateField::TumorVolumeSem => rec.tumor_volume_sem,
            AggregateField::MetastaticSitesMean => rec.metastatic_sites_mean,
            AggregateField::MetastaticSitesSem => rec.metastatic_sites_sem,
            AggregateField::SubjectCount => rec.subjects as f64,
        }
    }
}

#[derive(Default)]
struct Group {
    rows: usize,
    volumes: Vec<f64>,
    sites: Vec<f64>,
}

/// Groups joined rows by (treatment, timepoint). Rows lacking either key
/// cannot be placed in a group and are skipped. Output is sorted by
/// treatment, then timepoint.
pub fn aggregate(rows: &[JoinedRecord]) -> Vec<AggregateRecord> {
    let mut groups: BTreeMap<(&str, u32), Group> = BTreeMap::new();
    for row in rows {
        let (Some(treatment), Some(timepoint)) = (row.treatment.as_deref(), row.timepoint) else {
            continue;
        };
        let group = groups.entry((treatment, timepoint)).or_default();
        group.rows += 1;
        if let Some(v) = row.tumor_volume {
            group.volumes.push(v);
        }
        if let Some(s) = row.metastatic_sites {
            group.sites.push(s as f64);
        }
    }

    groups
        .into_iter()
        .map(|((treatment, timepoint), g)| AggregateRecord {
            treatment: treatment.to_string(),
            timepoint,
            tumor_volume_mean: mean(&g.volumes),
            tumor_volume_sem: sem(&g.volumes),
            metastatic_sites_mean: mean(&g.sites),
            metastatic_sites_sem: sem(&g.sites),
            subjects: g.rows,
        })
        .collect()
}

/// Long (treatment, timepoint, value) triples for one aggregate field.
pub fn to_long(aggregates: &[AggregateRecord], field: AggregateField) -> Vec<LongRecord> {
    aggregates
        .iter()
        .map(|rec| LongRecord {
            treatment: rec.treatment.clone(),
            timepoint: rec.timepoint,
            value: field.value(rec),
        })
        .collect()
}
