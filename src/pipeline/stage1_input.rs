use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{observations, subjects};
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(
            subjects = %ctx.subjects_path.display(),
            observations = %ctx.observations_path.display(),
            "input_files"
        );

        let subjects = subjects::read_subjects(&ctx.subjects_path)?;
        let observations = observations::read_observations(&ctx.observations_path)?;

        info!(
            subjects = subjects.len(),
            observations = observations.len(),
            "input_loaded"
        );

        ctx.input_meta.subjects = Some(subjects.len() as u64);
        ctx.input_meta.observations = Some(observations.len() as u64);
        ctx.subjects = subjects;
        ctx.observations = observations;
        Ok(())
    }
}
