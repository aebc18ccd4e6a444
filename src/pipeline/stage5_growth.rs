use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::{survival_percent, tumor_growth};

pub struct Stage5Growth;

impl Stage5Growth {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Growth {
    fn name(&self) -> &'static str {
        "stage5_growth"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let tables = ctx.tables()?;
        let growth = tumor_growth(&tables.tumor_volume_mean)
            .context("failed to compute tumor growth")?;
        let survival = survival_percent(&tables.subject_count)
            .context("failed to compute survival rate")?;

        for g in &growth {
            info!(
                treatment = %g.treatment,
                from = g.first_timepoint,
                to = g.last_timepoint,
                percent_change = g.percent_change,
                "tumor_growth"
            );
        }

        ctx.growth = growth;
        ctx.survival = Some(survival);
        Ok(())
    }
}
