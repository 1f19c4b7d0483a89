use bbg_history::models::RawSeries;
use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::tenor::Tenor;

/// The two raw vendor series backing one tenor: the Treasury constant
/// maturity yield and the matching SOFR OIS rate, both in percentage points.
#[derive(Clone, Debug)]
pub struct TenorPair {
    pub tenor: Tenor,
    pub treasury: RawSeries,
    pub sofr_ois: RawSeries,
}

/// One output observation: the Treasury-SOFR basis for a tenor on a date,
/// in basis points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisRow {
    pub date: NaiveDate,
    pub tenor: Tenor,
    pub basis_bps: f64,
}

/// The assembled long-format result table.
///
/// Rows are grouped by tenor in [`Tenor::ALL`] order, and within each tenor
/// sorted by strictly ascending date. Builders uphold this; the table itself
/// only stores the rows.
#[derive(Clone, Debug, Default)]
pub struct BasisTable {
    rows: Vec<BasisRow>,
}

impl BasisTable {
    pub fn new(rows: Vec<BasisRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[BasisRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row counts keyed by tenor, in [`Tenor::ALL`] order. Tenors that
    /// contributed nothing are present with a count of zero.
    pub fn rows_per_tenor(&self) -> IndexMap<Tenor, usize> {
        let mut counts: IndexMap<Tenor, usize> =
            Tenor::ALL.iter().map(|tenor| (*tenor, 0)).collect();
        for row in &self.rows {
            if let Some(count) = counts.get_mut(&row.tenor) {
                *count += 1;
            }
        }
        counts
    }
}
