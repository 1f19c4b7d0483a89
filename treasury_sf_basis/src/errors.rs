use std::path::PathBuf;

use bbg_history::providers::ProviderError;
use thiserror::Error;

use crate::io::sink::SinkError;
use crate::models::{ParseTenorError, Tenor};

/// The unified error type for the `treasury_sf_basis` crate.
///
/// Every variant identifies which pipeline stage gave up; the chained source
/// carries the vendor- or filesystem-level detail.
#[derive(Debug, Error)]
pub enum Error {
    /// A vendor fetch failed. Carries the tenor and ticker being pulled when
    /// the provider gave up.
    #[error("acquisition failed for {tenor} ({ticker}): {source}")]
    Acquisition {
        tenor: Tenor,
        ticker: String,
        source: ProviderError,
    },

    /// Writing the output table failed.
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A previously written basis table could not be opened.
    #[error("failed to read basis table from {}: {source}", path.display())]
    ReadTable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A previously written basis table did not have the expected shape.
    #[error("basis table at {} is malformed: {message}", path.display())]
    MalformedTable { path: PathBuf, message: String },

    /// A tenor code in a stored table is not part of the universe.
    #[error("invalid tenor in basis table: {0}")]
    InvalidTenor(#[from] ParseTenorError),

    /// Rendering the chart failed.
    #[error("Plot error: {0}")]
    Plot(String),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// An error from the Polars library.
    #[error("Polars operation failed")]
    Polars(#[from] polars::prelude::PolarsError),
}
