use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::{env_var, get_env_var};
use snafu::{ResultExt, ensure};

use crate::{
    models::{HistoryRequest, RawSeries},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, DataSourceUnavailableSnafu, DecodeSnafu,
        InstrumentNotFoundSnafu, InvalidTokenSnafu, MissingEnvVarSnafu, ProviderError,
        ProviderInitError, ValidationSnafu,
        bbg_gateway::response::{GatewayErrorBody, GatewayHistoryResponse},
    },
};

/// Base URL used when `BBG_GATEWAY_URL` is not set; the gateway's own default
/// bind address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:18194";

/// Per-request wall-clock bound. A gateway that neither answers nor refuses
/// within this window counts as unavailable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const HISTORY_PATH: &str = "/v1/history";
const HISTORY_FIELD: &str = "PX_LAST";

/// History provider backed by a Bloomberg terminal gateway.
pub struct TerminalGatewayProvider {
    client: Client,
    base_url: String,
    _token: Option<SecretString>,
}

impl TerminalGatewayProvider {
    /// Creates a provider from the environment.
    ///
    /// Requires `BBG_GATEWAY_URL`; reads the optional bearer token from
    /// `BBG_GATEWAY_TOKEN`.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        let base_url = get_env_var("BBG_GATEWAY_URL").context(MissingEnvVarSnafu)?;
        Self::with_options(base_url, read_token(), DEFAULT_TIMEOUT)
    }

    /// Creates a provider for an explicit base URL, still honoring the
    /// optional `BBG_GATEWAY_TOKEN` environment variable.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderInitError> {
        Self::with_options(base_url.into(), read_token(), DEFAULT_TIMEOUT)
    }

    /// Fully explicit constructor; the other constructors route through this.
    pub fn with_options(
        base_url: String,
        token: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &token {
            let bearer = format!("Bearer {}", token.expose_secret());
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&bearer).context(InvalidTokenSnafu)?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            _token: token,
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn read_token() -> Option<SecretString> {
    env_var("BBG_GATEWAY_TOKEN").map(|token| SecretString::new(token.into()))
}

#[async_trait]
impl DataProvider for TerminalGatewayProvider {
    async fn fetch_history(&self, request: HistoryRequest) -> Result<RawSeries, ProviderError> {
        ensure!(
            !request.ticker.trim().is_empty(),
            ValidationSnafu {
                message: "ticker must not be empty",
            }
        );

        let url = format!("{}{}", self.base_url, HISTORY_PATH);
        let query: Vec<(&str, String)> = vec![
            ("ticker", request.ticker.clone()),
            ("field", HISTORY_FIELD.to_string()),
            ("start", request.range.start().format("%Y-%m-%d").to_string()),
            ("end", request.range.end().format("%Y-%m-%d").to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context(DataSourceUnavailableSnafu)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return InstrumentNotFoundSnafu {
                ticker: request.ticker,
            }
            .fail();
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            let message = serde_json::from_str::<GatewayErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error.or(parsed.message))
                .unwrap_or(body);
            return ApiSnafu {
                status: status.as_u16(),
                message,
            }
            .fail();
        }

        let payload = response
            .json::<GatewayHistoryResponse>()
            .await
            .context(DecodeSnafu)?;

        // The gateway is expected to honor start/end, but the trait contract
        // is enforced here regardless.
        let observations = payload
            .observations
            .into_iter()
            .filter(|obs| request.range.contains(obs.date))
            .map(|obs| (obs.date, obs.value.unwrap_or(f64::NAN)));

        Ok(RawSeries::from_observations(payload.ticker, observations))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use chrono::NaiveDate;

    use super::*;
    use crate::models::DateRange;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let provider = TerminalGatewayProvider::with_options(
            "http://localhost:9999/".to_string(),
            None,
            DEFAULT_TIMEOUT,
        )
        .unwrap();
        assert_eq!(provider.base_url(), "http://localhost:9999");
    }

    #[tokio::test]
    async fn empty_ticker_is_rejected_before_any_request() {
        let provider = TerminalGatewayProvider::with_base_url("http://localhost:9999").unwrap();

        let err = provider
            .fetch_history(HistoryRequest::new("   ", range()))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation { .. }));
    }

    #[tokio::test]
    async fn unreachable_gateway_maps_to_data_source_unavailable() {
        // Port 1 is reserved and has no listener; the connection is refused
        // without any gateway involvement.
        let provider = TerminalGatewayProvider::with_options(
            "http://127.0.0.1:1".to_string(),
            None,
            Duration::from_secs(2),
        )
        .unwrap();

        let err = provider
            .fetch_history(HistoryRequest::new("USGG10YR Index", range()))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::DataSourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn not_found_status_maps_to_instrument_not_found() {
        // One-shot stand-in for the gateway that answers every request
        // with 404.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            );
        });

        let provider = TerminalGatewayProvider::with_options(
            format!("http://{addr}"),
            None,
            Duration::from_secs(5),
        )
        .unwrap();

        let err = provider
            .fetch_history(HistoryRequest::new("NOSUCHTICKER XX", range()))
            .await
            .unwrap_err();
        match err {
            ProviderError::InstrumentNotFound { ticker, .. } => {
                assert_eq!(ticker, "NOSUCHTICKER XX");
            }
            other => panic!("unexpected error: {other}"),
        }
        server.join().unwrap();
    }
}
