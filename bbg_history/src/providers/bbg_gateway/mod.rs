//! HTTP client for a Bloomberg terminal gateway.
//!
//! The gateway is a small service running next to a Bloomberg terminal that
//! exposes daily history (`PX_LAST`) over plain HTTP, so machines without a
//! terminal session can still pull vendor data. This module maps its endpoint
//! onto the [`DataProvider`](crate::providers::DataProvider) trait.

mod provider;
mod response;

pub use provider::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TerminalGatewayProvider};
pub use response::{GatewayHistoryResponse, GatewayObservation};
