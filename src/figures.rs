//! Chart generation using plotters (SVG output)
//!
//! Uses the SVG backend to avoid system font dependencies.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::scores::GrowthSummary;
use crate::table::WideTable;

const SIZE: (u32, u32) = (900, 600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSign {
    Growth,
    Shrinkage,
}

/// Geometry of one bar in the growth chart, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub treatment: String,
    pub value: f64,
    pub sign: BarSign,
    pub label: String,
    /// Above the bar top for growth, below the bar bottom for shrinkage.
    pub label_y: f64,
}

/// Bars for the growth chart plus the y range that holds bars and labels.
pub fn growth_bars(growth: &[GrowthSummary]) -> (Vec<Bar>, (f64, f64)) {
    let lo = growth
        .iter()
        .map(|g| g.percent_change)
        .fold(0.0f64, f64::min);
    let hi = growth
        .iter()
        .map(|g| g.percent_change)
        .fold(0.0f64, f64::max);
    let pad = ((hi - lo) * 0.15).max(1.0);

    let bars = growth
        .iter()
        .enumerate()
        .map(|(index, g)| {
            let sign = if g.percent_change >= 0.0 {
                BarSign::Growth
            } else {
                BarSign::Shrinkage
            };
            // text is anchored at its top-left corner
            let label_y = match sign {
                BarSign::Growth => g.percent_change + pad * 0.6,
                BarSign::Shrinkage => g.percent_change - pad * 0.1,
            };
            Bar {
                index,
                treatment: g.treatment.clone(),
                value: g.percent_change,
                sign,
                label: g.label(),
                label_y,
            }
        })
        .collect();

    (bars, (lo - pad, hi + pad))
}

/// Line chart with one series per treatment column, with optional vertical
/// error bars taken from the matching cells of `errors`.
pub fn generate_time_series(
    path: &Path,
    title: &str,
    y_desc: &str,
    values: &WideTable,
    errors: Option<&WideTable>,
) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    if values.timepoints.is_empty() {
        root.draw(&Text::new(
            "No data",
            (SIZE.0 as i32 / 2, SIZE.1 as i32 / 2),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let x_min = *values.timepoints.first().unwrap_or(&0) as f64;
    let mut x_max = *values.timepoints.last().unwrap_or(&0) as f64;
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let (y_min, y_max) = value_range(values, errors);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Treatment Duration (Days)")
        .y_desc(y_desc)
        .draw()?;

    for (col, treatment) in values.treatments.iter().enumerate() {
        let color = Palette99::pick(col).to_rgba();
        let points: Vec<(f64, f64)> = values
            .present(treatment)
            .into_iter()
            .map(|(tp, v)| (tp as f64, v))
            .collect();

        // a missing cell breaks the line instead of dropping to zero
        for run in contiguous_runs(values, col) {
            chart.draw_series(LineSeries::new(run, color.stroke_width(2)))?;
        }

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )?
            .label(treatment.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        if let Some(errors) = errors {
            chart.draw_series(values.timepoints.iter().filter_map(|&tp| {
                let mean = values.get(tp, treatment)?;
                let err = errors.get(tp, treatment).filter(|e| e.is_finite())?;
                Some(ErrorBar::new_vertical(
                    tp as f64,
                    mean - err,
                    mean,
                    mean + err,
                    color.stroke_width(1),
                    8,
                ))
            }))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Bar chart of percent tumor volume change, one bar per treatment.
pub fn generate_growth_bars(path: &Path, growth: &[GrowthSummary]) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    if growth.is_empty() {
        root.draw(&Text::new(
            "No growth data",
            (SIZE.0 as i32 / 2, SIZE.1 as i32 / 2),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let (bars, (y_min, y_max)) = growth_bars(growth);
    let n = bars.len();
    let last_timepoint = growth.iter().map(|g| g.last_timepoint).max().unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Tumor Growth Over {}-Day Treatment Period", last_timepoint),
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            if let SegmentValue::CenterOf(idx) = x {
                if *idx < bars.len() {
                    return bars[*idx].treatment.clone();
                }
            }
            String::new()
        })
        .y_desc("% Tumor Volume Change")
        .draw()?;

    chart.draw_series(bars.iter().map(|bar| {
        let color = match bar.sign {
            BarSign::Growth => RED,
            BarSign::Shrinkage => GREEN,
        };
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(bar.index), 0.0),
                (SegmentValue::Exact(bar.index + 1), bar.value),
            ],
            color.filled(),
        );
        rect.set_margin(0, 0, 20, 20);
        rect
    }))?;

    chart.draw_series(bars.iter().map(|bar| {
        Text::new(
            bar.label.clone(),
            (SegmentValue::CenterOf(bar.index), bar.label_y),
            ("sans-serif", 15).into_font().color(&BLACK),
        )
    }))?;

    // Zero line
    chart.draw_series(LineSeries::new(
        [(SegmentValue::Exact(0), 0.0), (SegmentValue::Exact(n), 0.0)],
        &BLACK,
    ))?;

    root.present()?;
    Ok(())
}

fn contiguous_runs(values: &WideTable, col: usize) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (tp, row) in values.timepoints.iter().zip(&values.cells) {
        match row[col] {
            Some(v) if v.is_finite() => current.push((*tp as f64, v)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn value_range(values: &WideTable, errors: Option<&WideTable>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for treatment in &values.treatments {
        for (tp, v) in values.present(treatment) {
            if !v.is_finite() {
                continue;
            }
            let err = errors
                .and_then(|e| e.get(tp, treatment))
                .filter(|e| e.is_finite())
                .unwrap_or(0.0);
            lo = lo.min(v - err);
            hi = hi.max(v + err);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(0.5);
    (lo - pad, hi + pad)
}
