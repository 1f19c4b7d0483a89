//! Provider abstraction for history sources.
//!
//! This module defines the [`DataProvider`] trait, the unified interface for
//! fetching daily time series from a market data vendor. The production
//! implementation is [`bbg_gateway::TerminalGatewayProvider`], which talks to
//! a Bloomberg terminal gateway over HTTP; tests substitute an in-memory fake.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) so the pipeline can be wired to either at runtime.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use bbg_history::models::{HistoryRequest, RawSeries};
//! use bbg_history::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_history(
//!         &self,
//!         request: HistoryRequest,
//!     ) -> Result<RawSeries, ProviderError> {
//!         Ok(RawSeries::from_observations(request.ticker, vec![]))
//!     }
//! }
//! ```

pub mod bbg_gateway;

use async_trait::async_trait;
use shared_utils::env::MissingEnvVarError;
use snafu::{Backtrace, Snafu};

use crate::models::{HistoryRequest, RawSeries};

/// Trait for fetching one daily history series from a market data provider.
///
/// Implement this trait for each concrete data vendor, and once more as a
/// canned-data fake for tests. The trait is designed for async usage and
/// supports dynamic dispatch (`dyn DataProvider`).
#[async_trait]
pub trait DataProvider {
    /// Fetches the daily series for `request.ticker` restricted to
    /// `request.range`.
    ///
    /// # Returns
    ///
    /// * `Ok(RawSeries)` - observations sorted ascending by date; dates the
    ///   vendor published with a null value appear as `f64::NAN`.
    /// * `Err(ProviderError)` - the ticker was unknown, the source was
    ///   unreachable, or the response could not be decoded.
    async fn fetch_history(&self, request: HistoryRequest) -> Result<RawSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// A required environment variable is not set.
    #[snafu(display("Missing environment variable: {source}"))]
    MissingEnvVar {
        source: MissingEnvVarError,
        backtrace: Backtrace,
    },

    /// Failed to build the reqwest client.
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The access token cannot be put in an Authorization header.
    #[snafu(display("Invalid access token format: {source}"))]
    InvalidToken {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a [`DataProvider`] implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// The data source could not be reached at all (connection refused, DNS
    /// failure, timeout). Retrying later may succeed.
    #[snafu(display("Data source unavailable: {source}"))]
    DataSourceUnavailable {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The source answered but does not know the requested ticker. Retrying
    /// will not help; the request itself is wrong.
    #[snafu(display("Instrument not found: {ticker}"))]
    InstrumentNotFound {
        ticker: String,
        backtrace: Backtrace,
    },

    /// The source returned a non-success status other than not-found.
    #[snafu(display("API error (HTTP {status}): {message}"))]
    Api {
        status: u16,
        message: String,
        backtrace: Backtrace,
    },

    /// The response body could not be decoded into the expected shape.
    #[snafu(display("Failed to decode response: {source}"))]
    Decode {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },
}
