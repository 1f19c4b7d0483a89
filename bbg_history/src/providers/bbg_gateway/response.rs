use chrono::NaiveDate;
use serde::Deserialize;

/// One `(date, value)` point in a gateway history payload.
///
/// `value` is `null` when the terminal reports the date without a price, e.g.
/// a holiday row or a field the instrument did not publish that day.
#[derive(Deserialize, Debug)]
pub struct GatewayObservation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Body of a successful `GET /v1/history` response.
#[derive(Deserialize, Debug)]
pub struct GatewayHistoryResponse {
    /// Ticker echoed back by the gateway.
    pub ticker: String,
    /// Field the values were read from, normally `PX_LAST`.
    #[serde(default)]
    pub field: Option<String>,
    pub observations: Vec<GatewayObservation>,
}

/// Error body the gateway sends with non-2xx statuses. Both field names are
/// seen in the wild depending on the gateway version.
#[derive(Deserialize, Debug)]
pub struct GatewayErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
