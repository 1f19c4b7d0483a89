//! Fetches the raw vendor series for every tenor.

use bbg_history::{
    models::{DateRange, HistoryRequest, RawSeries},
    providers::DataProvider,
};
use tracing::info;

use crate::{
    errors::Error,
    models::{Tenor, TenorPair},
};

/// The Bloomberg tickers backing one tenor.
#[derive(Clone, Copy, Debug)]
pub struct TenorTickers {
    pub tenor: Tenor,
    /// Constant maturity Treasury yield, `USGG<n>YR Index`.
    pub treasury: &'static str,
    /// SOFR OIS swap rate, `USOSFR<n> Curncy`.
    pub sofr_ois: &'static str,
}

/// The full instrument universe, in output order. Spelled out entry by
/// entry; the ticker strings are the exact vendor identifiers, never derived
/// at runtime.
pub const TENOR_UNIVERSE: [TenorTickers; 5] = [
    TenorTickers {
        tenor: Tenor::Y2,
        treasury: "USGG2YR Index",
        sofr_ois: "USOSFR2 Curncy",
    },
    TenorTickers {
        tenor: Tenor::Y5,
        treasury: "USGG5YR Index",
        sofr_ois: "USOSFR5 Curncy",
    },
    TenorTickers {
        tenor: Tenor::Y10,
        treasury: "USGG10YR Index",
        sofr_ois: "USOSFR10 Curncy",
    },
    TenorTickers {
        tenor: Tenor::Y20,
        treasury: "USGG20YR Index",
        sofr_ois: "USOSFR20 Curncy",
    },
    TenorTickers {
        tenor: Tenor::Y30,
        treasury: "USGG30YR Index",
        sofr_ois: "USOSFR30 Curncy",
    },
];

/// Pulls both series for every tenor in [`TENOR_UNIVERSE`] order.
///
/// Fetches run sequentially; the first failure aborts the whole run with the
/// offending tenor and ticker attached, so a partial universe never reaches
/// the compute stage.
pub async fn fetch_tenor_pairs(
    provider: &dyn DataProvider,
    range: DateRange,
) -> Result<Vec<TenorPair>, Error> {
    let mut pairs = Vec::with_capacity(TENOR_UNIVERSE.len());
    for entry in &TENOR_UNIVERSE {
        let treasury = fetch_series(provider, entry.tenor, entry.treasury, range).await?;
        let sofr_ois = fetch_series(provider, entry.tenor, entry.sofr_ois, range).await?;
        pairs.push(TenorPair {
            tenor: entry.tenor,
            treasury,
            sofr_ois,
        });
    }
    Ok(pairs)
}

async fn fetch_series(
    provider: &dyn DataProvider,
    tenor: Tenor,
    ticker: &'static str,
    range: DateRange,
) -> Result<RawSeries, Error> {
    let series = provider
        .fetch_history(HistoryRequest::new(ticker, range))
        .await
        .map_err(|source| Error::Acquisition {
            tenor,
            ticker: ticker.to_string(),
            source,
        })?;
    info!(%tenor, ticker, observations = series.len(), "fetched series");
    Ok(series)
}
