use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage7Output;

impl Stage7Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Output {
    fn name(&self) -> &'static str {
        "stage7_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.write_tsv {
            let tables = ctx.tables()?;
            for table in tables.iter().chain(std::iter::once(ctx.survival()?)) {
                tsv_writer::write_wide_tsv(&ctx.output.tsv_path(&table.value_name), table)?;
            }
            tsv_writer::write_growth_tsv(&ctx.output.tsv_path("tumor_growth"), &ctx.growth)?;
        }
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
        }

        info!("stage7_output_ready");
        Ok(())
    }
}
