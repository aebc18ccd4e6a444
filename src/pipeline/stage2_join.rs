use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::table::outer_join;

pub struct Stage2Join;

impl Stage2Join {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Join {
    fn name(&self) -> &'static str {
        "stage2_join"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let (joined, warnings) = outer_join(&ctx.subjects, &ctx.observations);

        let unmatched_subjects = joined.iter().filter(|r| r.timepoint.is_none()).count();
        let unmatched_observations = joined.iter().filter(|r| r.treatment.is_none()).count();
        for warning in &warnings {
            warn!("{}", warning);
        }
        info!(
            rows = joined.len(),
            unmatched_subjects,
            unmatched_observations,
            "join_ready"
        );

        ctx.input_meta.joined_rows = Some(joined.len() as u64);
        ctx.input_meta.unmatched_subjects = Some(unmatched_subjects as u64);
        ctx.input_meta.unmatched_observations = Some(unmatched_observations as u64);
        ctx.joined = joined;
        ctx.warnings.extend(warnings);
        Ok(())
    }
}
