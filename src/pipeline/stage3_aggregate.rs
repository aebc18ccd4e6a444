use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::table::aggregate;

pub struct Stage3Aggregate;

impl Stage3Aggregate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Aggregate {
    fn name(&self) -> &'static str {
        "stage3_aggregate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let aggregates = aggregate(&ctx.joined);
        if aggregates.is_empty() {
            bail!("no (treatment, timepoint) groups: joined table has no matched rows");
        }
        info!(groups = aggregates.len(), "aggregates_ready");
        ctx.aggregates = aggregates;
        Ok(())
    }
}
