//! Client library for pulling daily Bloomberg history through a terminal-side
//! HTTP gateway.
//!
//! The crate exposes two layers:
//!
//! * [`models`] - vendor-neutral request and series types ([`models::HistoryRequest`],
//!   [`models::RawSeries`]).
//! * [`providers`] - the [`providers::DataProvider`] trait plus the concrete
//!   [`providers::bbg_gateway::TerminalGatewayProvider`] that speaks to the
//!   gateway over HTTP.
//!
//! Consumers that want to stay testable should depend on `dyn DataProvider`
//! and inject the gateway provider at the edge.

pub mod models;
pub mod providers;
