//! SVG chart of the basis history, one line per tenor.

use std::path::Path;

use bbg_history::models::DateRange;
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;

use crate::errors::Error;
use crate::models::{BasisTable, Tenor};

/// Default first date shown. SOFR publication began in 2018; there is no
/// earlier basis to draw.
pub const DEFAULT_PLOT_START: NaiveDate = match NaiveDate::from_ymd_opt(2018, 1, 1) {
    Some(date) => date,
    None => panic!("default plot start date is invalid"),
};

/// File name used when the caller does not pick one.
pub const DEFAULT_PLOT_FILE_NAME: &str = "treasury_sf_basis.svg";

const CHART_SIZE: (u32, u32) = (1280, 720);

/// Fixed per-tenor line color, stable across runs.
fn tenor_color(tenor: Tenor) -> RGBColor {
    match tenor {
        Tenor::Y2 => RGBColor(31, 119, 180),
        Tenor::Y5 => RGBColor(255, 127, 14),
        Tenor::Y10 => RGBColor(44, 160, 44),
        Tenor::Y20 => RGBColor(214, 39, 40),
        Tenor::Y30 => RGBColor(148, 103, 189),
    }
}

/// Renders the basis chart for `window` into an SVG file at `output`.
///
/// NaN rows and rows outside the window are left out; a tenor with nothing to
/// show is simply absent from the legend. Errors if the window contains no
/// drawable observation at all.
pub fn render_basis_chart(
    table: &BasisTable,
    output: &Path,
    window: DateRange,
) -> Result<(), Error> {
    let mut series: Vec<(Tenor, Vec<(NaiveDate, f64)>)> = Tenor::ALL
        .iter()
        .map(|tenor| (*tenor, Vec::new()))
        .collect();
    for row in table.rows() {
        if row.basis_bps.is_nan() || !window.contains(row.date) {
            continue;
        }
        if let Some((_, points)) = series.iter_mut().find(|(tenor, _)| *tenor == row.tenor) {
            points.push((row.date, row.basis_bps));
        }
    }
    series.retain(|(_, points)| !points.is_empty());
    if series.is_empty() {
        return Err(Error::Plot(
            "no drawable observations in the requested window".to_string(),
        ));
    }

    let mut x_min = NaiveDate::MAX;
    let mut x_max = NaiveDate::MIN;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, points) in &series {
        for (date, value) in points {
            x_min = x_min.min(*date);
            x_max = x_max.max(*date);
            y_min = y_min.min(*value);
            y_max = y_max.max(*value);
        }
    }

    if x_min == x_max {
        x_max += Duration::days(1);
    }
    let pad = {
        let span = y_max - y_min;
        if span > 0.0 { span * 0.05 } else { 1.0 }
    };
    let y_lo = y_min - pad;
    let y_hi = y_max + pad;

    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Treasury - SOFR OIS basis by tenor", ("sans-serif", 24))
        .margin(12)
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(x_min..x_max, y_lo..y_hi)
        .map_err(to_plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Basis (bps)")
        .x_label_formatter(&|date| date.format("%Y-%m").to_string())
        .draw()
        .map_err(to_plot_err)?;

    // Zero reference line; clipped away when the basis never crosses zero.
    chart
        .draw_series(LineSeries::new(
            vec![(x_min, 0.0), (x_max, 0.0)],
            &BLACK.mix(0.3),
        ))
        .map_err(to_plot_err)?;

    for (tenor, points) in &series {
        let color = tenor_color(*tenor);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .map_err(to_plot_err)?
            .label(tenor.code())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(to_plot_err)?;

    root.present().map_err(to_plot_err)?;
    Ok(())
}

fn to_plot_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}
