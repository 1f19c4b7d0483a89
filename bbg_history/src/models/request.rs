use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected range construction: `start` was after `end`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date range: start {start} is after end {end}")]
pub struct InvalidDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Inclusive date range for a history request.
///
/// Construction goes through [`DateRange::new`] so a `DateRange` always
/// satisfies `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start > end {
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First date of the window (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parameters for requesting one daily history series from a provider.
///
/// The ticker is passed through to the vendor verbatim, including any market
/// sector suffix (e.g. `"USGG10YR Index"`), so callers own the exact vendor
/// spelling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Vendor instrument identifier, e.g. `"USGG10YR Index"`.
    pub ticker: String,

    /// Calendar window the observations must fall in (both ends inclusive).
    pub range: DateRange,
}

impl HistoryRequest {
    pub fn new(ticker: impl Into<String>, range: DateRange) -> Self {
        Self {
            ticker: ticker.into(),
            range,
        }
    }
}
