//! The basis computation itself: align the two curves per tenor and take the
//! spread.

use bbg_history::models::RawSeries;
use chrono::NaiveDate;

use crate::models::{BasisRow, BasisTable, TenorPair};

/// Percentage points to basis points.
const BPS_PER_POINT: f64 = 100.0;

/// Joins one tenor's Treasury and SOFR OIS series on date and yields spread
/// rows in ascending date order.
///
/// The join is inner: dates present in only one of the two series produce no
/// row. A date present in both keeps its row even when either value is NaN;
/// the NaN then flows through the subtraction, so known gaps stay visible in
/// the output instead of silently shrinking it.
pub fn basis_rows<'a>(pair: &'a TenorPair) -> impl Iterator<Item = BasisRow> + 'a {
    join_dates(&pair.treasury, &pair.sofr_ois).map(|(date, treasury, sofr_ois)| BasisRow {
        date,
        tenor: pair.tenor,
        basis_bps: (treasury - sofr_ois) * BPS_PER_POINT,
    })
}

/// Builds the full long-format table from per-tenor pairs.
///
/// Row order follows the order of `pairs`; the acquisition stage passes them
/// in [`Tenor::ALL`](crate::models::Tenor::ALL) order, which makes output
/// layout independent of relative fetch timing.
pub fn build_table(pairs: &[TenorPair]) -> BasisTable {
    let mut rows = Vec::new();
    for pair in pairs {
        rows.extend(basis_rows(pair));
    }
    BasisTable::new(rows)
}

fn join_dates<'a>(
    left: &'a RawSeries,
    right: &'a RawSeries,
) -> impl Iterator<Item = (NaiveDate, f64, f64)> + 'a {
    left.observations().iter().filter_map(|(date, left_value)| {
        right
            .value_on(*date)
            .map(|right_value| (*date, *left_value, right_value))
    })
}
