//! Daily Treasury cash/SOFR-swap basis pipeline.
//!
//! For each benchmark tenor (2Y, 5Y, 10Y, 20Y, 30Y) the pipeline pulls the
//! constant maturity Treasury yield (`USGG<n>YR Index`) and the matching SOFR
//! OIS rate (`USOSFR<n> Curncy`) from a Bloomberg terminal gateway, inner
//! joins the two series on date, and writes the spread
//! `(treasury - sofr_ois) * 100` in basis points to a single long-format
//! parquet file: columns `date`, `tenor`, `basis_bps`.
//!
//! Design points that matter to consumers:
//!
//! * The output is written atomically; a failed run never clobbers or
//!   truncates the previous table.
//! * Dates the vendor published with a null value survive as NaN rows rather
//!   than disappearing, so missing data is visible downstream.
//! * Any fetch failure aborts the whole run. There is no partial output.

pub mod acquisition;
pub mod basis;
pub mod config;
pub mod errors;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod plot;
pub mod report;
