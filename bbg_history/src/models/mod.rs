//! Vendor-neutral data types shared by all history providers.

pub mod request;
pub mod series;

pub use request::{DateRange, HistoryRequest, InvalidDateRange};
pub use series::RawSeries;
