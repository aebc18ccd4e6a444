use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::figures;
use crate::pipeline::Stage;

pub struct Stage6Charts;

impl Stage6Charts {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Charts {
    fn name(&self) -> &'static str {
        "stage6_charts"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let tables = ctx.tables()?;
        let survival = ctx.survival()?;
        let out = &ctx.output;

        figures::generate_time_series(
            &out.tumor_response_chart,
            "Tumor Response to Treatment",
            "Tumor Volume (mm3)",
            &tables.tumor_volume_mean,
            Some(&tables.tumor_volume_sem),
        )?;
        figures::generate_time_series(
            &out.metastatic_spread_chart,
            "Metastatic Spread During Treatment",
            "# of Met Sites",
            &tables.metastatic_sites_mean,
            Some(&tables.metastatic_sites_sem),
        )?;
        figures::generate_time_series(
            &out.survival_rate_chart,
            "Survival During Treatment",
            "Survival Rate (%)",
            survival,
            None,
        )?;
        figures::generate_growth_bars(&out.tumor_growth_chart, &ctx.growth)?;

        let charts = vec![
            out.tumor_response_chart.clone(),
            out.metastatic_spread_chart.clone(),
            out.survival_rate_chart.clone(),
            out.tumor_growth_chart.clone(),
        ];
        info!(count = charts.len(), "charts_ready");
        ctx.charts = charts;
        Ok(())
    }
}
