//! Per-tenor summary statistics over a stored basis table.
//!
//! NaN rows count toward `rows` and `missing` but are excluded from every
//! moment, mirroring how dataframe libraries skip missing values. Sample
//! statistics use the bias-corrected estimators (ddof 1 for the standard
//! deviation, adjusted Fisher-Pearson skewness, excess kurtosis), so numbers
//! line up with the usual dataframe `describe` output. Zero-variance series
//! report 0 for both shape moments, again following the dataframe libraries;
//! a moment short of its minimum sample size (2 observations for the standard
//! deviation, 3 for skewness, 4 for kurtosis) is NaN.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::models::{BasisTable, Tenor};

/// Summary of one tenor's basis history.
#[derive(Clone, Copy, Debug)]
pub struct TenorSummary {
    pub tenor: Tenor,
    /// Rows present for this tenor, NaN rows included.
    pub rows: usize,
    /// Rows whose basis value is NaN.
    pub missing: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl TenorSummary {
    /// Observations the moments were computed from, NaN rows excluded.
    pub fn observations(&self) -> usize {
        self.rows - self.missing
    }
}

/// Computes summaries for all five tenors, in output order. Tenors with no
/// rows still get an entry, with every moment NaN.
pub fn summarize(table: &BasisTable) -> Vec<TenorSummary> {
    let mut grouped: IndexMap<Tenor, Vec<f64>> =
        Tenor::ALL.iter().map(|tenor| (*tenor, Vec::new())).collect();
    for row in table.rows() {
        if let Some(values) = grouped.get_mut(&row.tenor) {
            values.push(row.basis_bps);
        }
    }

    grouped
        .into_iter()
        .map(|(tenor, values)| summarize_tenor(tenor, &values))
        .collect()
}

fn summarize_tenor(tenor: Tenor, values: &[f64]) -> TenorSummary {
    let finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let rows = values.len();
    let missing = rows - finite.len();
    let n = finite.len();

    if n == 0 {
        return TenorSummary {
            tenor,
            rows,
            missing,
            mean: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            skewness: f64::NAN,
            kurtosis: f64::NAN,
        };
    }

    let nf = n as f64;
    let mean = finite.iter().sum::<f64>() / nf;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for value in &finite {
        min = min.min(*value);
        max = max.max(*value);
        let d = value - mean;
        m2 += d * d;
        m3 += d * d * d;
        m4 += d * d * d * d;
    }
    m2 /= nf;
    m3 /= nf;
    m4 /= nf;

    let variance = if n >= 2 { m2 * nf / (nf - 1.0) } else { f64::NAN };
    let std_dev = variance.sqrt();

    let skewness = if n < 3 {
        f64::NAN
    } else if m2 == 0.0 {
        // Flat series: report zero, not 0/0.
        0.0
    } else {
        // Adjusted Fisher-Pearson: G1 = n^2 / ((n-1)(n-2)) * m3 / s^3.
        nf * nf / ((nf - 1.0) * (nf - 2.0)) * m3 / (std_dev * std_dev * std_dev)
    };

    let kurtosis = if n < 4 {
        f64::NAN
    } else if m2 == 0.0 {
        0.0
    } else {
        // Bias-corrected excess kurtosis:
        // G2 = ((n+1) g2 + 6) * (n-1) / ((n-2)(n-3)), g2 = m4/m2^2 - 3.
        let g2 = m4 / (m2 * m2) - 3.0;
        ((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0))
    };

    TenorSummary {
        tenor,
        rows,
        missing,
        mean,
        std_dev,
        min,
        max,
        skewness,
        kurtosis,
    }
}

/// Renders summaries as a fixed-width text table for the terminal.
pub fn render(summaries: &[TenorSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>8} {:>8} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "tenor", "rows", "missing", "count", "mean", "std", "min", "max", "skew", "kurt"
    );
    for summary in summaries {
        let _ = writeln!(
            out,
            "{:<6} {:>8} {:>8} {:>8} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.3} {:>10.3}",
            summary.tenor.code(),
            summary.rows,
            summary.missing,
            summary.observations(),
            summary.mean,
            summary.std_dev,
            summary.min,
            summary.max,
            summary.skewness,
            summary.kurtosis,
        );
    }
    out
}
