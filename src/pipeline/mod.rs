use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_input;
pub mod stage2_join;
pub mod stage3_aggregate;
pub mod stage4_reshape;
pub mod stage5_growth;
pub mod stage6_charts;
pub mod stage7_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Every stage from input to written artifacts.
    pub fn full() -> Self {
        let mut stages: Vec<Box<dyn Stage>> = vec![Box::new(stage0_scaffold::Stage0Scaffold::new())];
        stages.extend(Self::analysis().stages);
        stages.push(Box::new(stage6_charts::Stage6Charts::new()));
        stages.push(Box::new(stage7_output::Stage7Output::new()));
        Self::new(stages)
    }

    /// Load through growth/survival, with no filesystem writes.
    pub fn analysis() -> Self {
        Self::new(vec![
            Box::new(stage1_input::Stage1Input::new()),
            Box::new(stage2_join::Stage2Join::new()),
            Box::new(stage3_aggregate::Stage3Aggregate::new()),
            Box::new(stage4_reshape::Stage4Reshape::new()),
            Box::new(stage5_growth::Stage5Growth::new()),
        ])
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
