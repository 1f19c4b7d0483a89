//! Run configuration: where to fetch from, what window, where to write.
//!
//! Precedence for every knob is CLI flag, then environment variable, then the
//! built-in default. [`PipelineConfig::from_env`] resolves the bottom two
//! layers; [`PipelineConfig::with_overrides`] applies the flags on top.

use std::path::PathBuf;

use bbg_history::{
    models::{DateRange, InvalidDateRange},
    providers::bbg_gateway::DEFAULT_BASE_URL,
};
use chrono::{NaiveDate, Utc};
use shared_utils::env::{env_var, env_var_or};

/// File name of the output table. Fixed; downstream consumers key on it.
pub const OUTPUT_FILE_NAME: &str = "ftsfr_treasury_sf_basis.parquet";

/// Directory the output lands in when `TSF_DATA_DIR` is not set.
pub const DEFAULT_DATA_DIR: &str = "./_data";

/// Earliest date requested from the vendor by default. SOFR OIS quotes do not
/// reach back this far; the early window simply comes back shorter.
pub const DEFAULT_START: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("default start date is invalid"),
};

const GATEWAY_URL_VAR: &str = "BBG_GATEWAY_URL";
const DATA_DIR_VAR: &str = "TSF_DATA_DIR";

/// Everything one pipeline run needs to know.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Base URL of the terminal gateway.
    pub gateway_url: String,
    /// First vendor date requested (inclusive).
    pub start: NaiveDate,
    /// Last vendor date requested (inclusive).
    pub end: NaiveDate,
    /// Full path of the parquet file to (re)write.
    pub output_path: PathBuf,
}

impl PipelineConfig {
    /// Resolves configuration from the environment and built-in defaults.
    ///
    /// The window defaults to 2000-01-01 through today (UTC).
    pub fn from_env() -> Self {
        let data_dir = PathBuf::from(env_var_or(DATA_DIR_VAR, DEFAULT_DATA_DIR));
        Self {
            gateway_url: env_var(GATEWAY_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            start: DEFAULT_START,
            end: Utc::now().date_naive(),
            output_path: data_dir.join(OUTPUT_FILE_NAME),
        }
    }

    /// Applies CLI-level overrides on top of the resolved configuration.
    pub fn with_overrides(
        mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        output: Option<PathBuf>,
        gateway_url: Option<String>,
    ) -> Self {
        if let Some(start) = start {
            self.start = start;
        }
        if let Some(end) = end {
            self.end = end;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        if let Some(gateway_url) = gateway_url {
            self.gateway_url = gateway_url;
        }
        self
    }

    /// The request window as a validated range.
    pub fn range(&self) -> Result<DateRange, InvalidDateRange> {
        DateRange::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> PipelineConfig {
        PipelineConfig {
            gateway_url: DEFAULT_BASE_URL.to_string(),
            start: DEFAULT_START,
            end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            output_path: PathBuf::from("./_data").join(OUTPUT_FILE_NAME),
        }
    }

    #[test]
    fn overrides_replace_only_what_was_given() {
        let config = base_config().with_overrides(
            Some(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()),
            None,
            None,
            Some("http://gateway.internal:18194".to_string()),
        );

        assert_eq!(config.start, NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
        assert_eq!(config.end, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        assert_eq!(
            config.output_path,
            PathBuf::from("./_data").join(OUTPUT_FILE_NAME)
        );
        assert_eq!(config.gateway_url, "http://gateway.internal:18194");
    }

    #[test]
    fn reversed_window_fails_validation() {
        let config = base_config().with_overrides(
            Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            None,
            None,
        );
        assert!(config.range().is_err());
    }

    #[test]
    fn default_start_is_well_formed() {
        assert_eq!(DEFAULT_START, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }
}
