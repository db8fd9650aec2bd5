//! Dual-axis SVG chart of the mock trend.

use plotters::prelude::*;
use std::ops::Range;
use thiserror::Error;

use crate::model::TrendSeries;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 400;
const FONT: &str = "sans-serif";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("trend contains non-finite values")]
    NonFinite,

    #[error("chart drawing failed: {0}")]
    Drawing(String),
}

fn drawing<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}

/// Render temperature (left axis) and humidity (right axis) against time.
pub fn render_trend_svg(series: &TrendSeries, title: &str) -> Result<String, ChartError> {
    let points = series.points();
    if points
        .iter()
        .any(|p| !p.temperature_c.is_finite() || !p.humidity_pct.is_finite())
    {
        return Err(ChartError::NonFinite);
    }

    let temp_range = padded_range(points.iter().map(|p| p.temperature_c));
    let humidity_range = padded_range(points.iter().map(|p| p.humidity_pct));
    let time_labels: Vec<String> = points
        .iter()
        .map(|p| p.time.format("%H:%M").to_string())
        .collect();
    let x_range = 0f64..(points.len() - 1) as f64;

    // Only whole indices map to a sample.
    let x_label = |x: &f64| {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        time_labels.get(idx as usize).cloned().unwrap_or_default()
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 22))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(56)
            .right_y_label_area_size(56)
            .build_cartesian_2d(x_range.clone(), temp_range)
            .map_err(drawing)?
            .set_secondary_coord(x_range, humidity_range);

        chart
            .configure_mesh()
            .x_labels(points.len())
            .x_label_formatter(&x_label)
            .x_desc("Time")
            .y_desc("Temperature (°C)")
            .y_label_style((FONT, 12).into_font().color(&RED))
            .draw()
            .map_err(drawing)?;

        chart
            .configure_secondary_axes()
            .y_desc("Humidity (%)")
            .label_style((FONT, 12).into_font().color(&BLUE))
            .draw()
            .map_err(drawing)?;

        chart
            .draw_series(LineSeries::new(
                points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (i as f64, p.temperature_c)),
                &RED,
            ))
            .map_err(drawing)?
            .label("Temperature (°C)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .draw_secondary_series(LineSeries::new(
                points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (i as f64, p.humidity_pct)),
                &BLUE,
            ))
            .map_err(drawing)?
            .label("Humidity (%)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing)?;

        root.present().map_err(drawing)?;
    }

    Ok(svg)
}

/// Min..max with a margin; a flat series still gets a visible range.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad)..(max + pad)
}
