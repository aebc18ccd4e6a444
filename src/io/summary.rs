use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let tables = ctx.tables()?;
    let timepoints = &tables.tumor_volume_mean.timepoints;

    let mut out = String::new();
    out.push_str(&format!("kira-trialqc v{}\n", ctx.tool_version));
    out.push_str(&format!(
        "Input: {} subjects, {} observations, {} joined rows\n",
        ctx.input_meta.subjects.unwrap_or(0),
        ctx.input_meta.observations.unwrap_or(0),
        ctx.input_meta.joined_rows.unwrap_or(0)
    ));
    match (timepoints.first(), timepoints.last()) {
        (Some(first), Some(last)) => out.push_str(&format!(
            "Timepoints: {} (days {}-{})\n",
            timepoints.len(),
            first,
            last
        )),
        _ => out.push_str("Timepoints: none\n"),
    }

    out.push_str("Tumor growth:\n");
    for g in &ctx.growth {
        let survival = ctx
            .survival
            .as_ref()
            .and_then(|s| s.get(g.last_timepoint, &g.treatment));
        match survival {
            Some(pct) => out.push_str(&format!(
                "  {:<12} {:>+8.2}%  survival {:.1}% at day {}\n",
                g.treatment, g.percent_change, pct, g.last_timepoint
            )),
            None => out.push_str(&format!(
                "  {:<12} {:>+8.2}%\n",
                g.treatment, g.percent_change
            )),
        }
    }

    if !ctx.charts.is_empty() {
        out.push_str(&format!("Charts: {}\n", ctx.charts.len()));
    }

    Ok(out)
}
