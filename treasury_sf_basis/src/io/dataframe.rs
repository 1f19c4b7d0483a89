use std::fs::File;
use std::path::Path;

use polars::prelude::{
    DataFrame, DateChunked, IntoColumn, IntoSeries, NamedFrom, PolarsResult, Series,
};
use polars_io::{SerReader, parquet::read::ParquetReader};

use crate::errors::Error;
use crate::models::{BasisRow, BasisTable};

/// Converts the basis table into its columnar layout: `date` (Date), `tenor`
/// (String), `basis_bps` (Float64), one row per observation, in table order.
pub fn basis_table_to_dataframe(table: &BasisTable) -> PolarsResult<DataFrame> {
    let mut dates = Vec::with_capacity(table.len());
    let mut tenors = Vec::with_capacity(table.len());
    let mut values = Vec::with_capacity(table.len());
    for row in table.rows() {
        dates.push(row.date);
        tenors.push(row.tenor.code());
        values.push(row.basis_bps);
    }

    DataFrame::new(vec![
        DateChunked::from_naive_date("date".into(), dates)
            .into_series()
            .into_column(),
        Series::new("tenor".into(), tenors).into_column(),
        Series::new("basis_bps".into(), values).into_column(),
    ])
}

/// Reads a previously written basis table back from parquet.
///
/// Used by the summary and plot commands, which run against the stored
/// artifact rather than refetching from the vendor.
pub fn read_basis_table(path: &Path) -> Result<BasisTable, Error> {
    let file = File::open(path).map_err(|source| Error::ReadTable {
        path: path.to_path_buf(),
        source,
    })?;
    let df = ParquetReader::new(file).finish()?;

    let date_series = df.column("date")?.as_materialized_series();
    let dates = date_series.date()?;
    let tenor_series = df.column("tenor")?.as_materialized_series();
    let tenors = tenor_series.str()?;
    let value_series = df.column("basis_bps")?.as_materialized_series();
    let values = value_series.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for ((date, tenor), value) in dates.as_date_iter().zip(tenors).zip(values) {
        let (Some(date), Some(tenor)) = (date, tenor) else {
            return Err(Error::MalformedTable {
                path: path.to_path_buf(),
                message: "null date or tenor cell".to_string(),
            });
        };
        rows.push(BasisRow {
            date,
            tenor: tenor.parse()?,
            // A null basis cell reads back as the NaN it was written as.
            basis_bps: value.unwrap_or(f64::NAN),
        });
    }

    Ok(BasisTable::new(rows))
}
