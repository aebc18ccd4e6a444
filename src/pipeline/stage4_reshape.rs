use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::table::{AggregateField, ReshapedTables, WideTable, pivot, to_long};

pub struct Stage4Reshape;

impl Stage4Reshape {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Reshape {
    fn name(&self) -> &'static str {
        "stage4_reshape"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let wide = |field: AggregateField| -> Result<WideTable> {
            let long = to_long(&ctx.aggregates, field);
            pivot(&long, field.name(), &ctx.treatments)
                .with_context(|| format!("failed to pivot {}", field.name()))
        };

        let tables = ReshapedTables {
            tumor_volume_mean: wide(AggregateField::TumorVolumeMean)?,
            tumor_volume_sem: wide(AggregateField::TumorVolumeSem)?,
            metastatic_sites_mean: wide(AggregateField::MetastaticSitesMean)?,
            metastatic_sites_sem: wide(AggregateField::MetastaticSitesSem)?,
            subject_count: wide(AggregateField::SubjectCount)?,
        };

        info!(
            timepoints = tables.tumor_volume_mean.timepoints.len(),
            treatments = tables.tumor_volume_mean.treatments.len(),
            "wide_tables_ready"
        );
        ctx.tables = Some(tables);
        Ok(())
    }
}
