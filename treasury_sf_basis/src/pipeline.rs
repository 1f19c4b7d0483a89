//! End-to-end run: fetch, compute, persist.

use std::path::PathBuf;

use bbg_history::providers::DataProvider;
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::{
    acquisition, basis,
    config::PipelineConfig,
    errors::Error,
    io::{DataSink, ParquetSink},
    models::Tenor,
};

/// What a completed run produced, for logging and exit reporting.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Total rows written across all tenors.
    pub rows_written: usize,
    /// Per-tenor row counts, in output order, zeros included.
    pub rows_per_tenor: IndexMap<Tenor, usize>,
    /// Where the table landed.
    pub output_path: PathBuf,
}

/// Runs the whole pipeline once.
///
/// Any stage failure aborts the run before the output path is touched, so the
/// previous table (if any) survives a broken run.
pub async fn run(provider: &dyn DataProvider, config: &PipelineConfig) -> Result<RunReport, Error> {
    let range = config
        .range()
        .map_err(|err| Error::Config(err.to_string()))?;
    info!(
        start = %range.start(),
        end = %range.end(),
        "fetching Treasury and SOFR OIS histories"
    );

    let pairs = acquisition::fetch_tenor_pairs(provider, range).await?;
    let table = basis::build_table(&pairs);

    let rows_per_tenor = table.rows_per_tenor();
    for (tenor, count) in &rows_per_tenor {
        if *count == 0 {
            warn!(%tenor, "no overlapping dates; tenor contributes zero rows");
        }
    }

    let sink = ParquetSink::new(config.output_path.clone());
    let output_path = sink.write(&table).await?;
    info!(rows = table.len(), path = %output_path.display(), "wrote basis table");

    Ok(RunReport {
        rows_written: table.len(),
        rows_per_tenor,
        output_path,
    })
}
