use chrono::NaiveDate;
use indexmap::IndexMap;

/// One daily history series as returned by a provider.
///
/// Observations are keyed by date, held in strictly ascending date order, and
/// deduplicated at construction (the last value seen for a date wins, matching
/// vendor "corrections overwrite" semantics). Values are the raw vendor quotes
/// in percentage points; a date published with a null value is stored as
/// `f64::NAN` rather than dropped, so gaps stay visible downstream.
#[derive(Clone, Debug)]
pub struct RawSeries {
    ticker: String,
    observations: IndexMap<NaiveDate, f64>,
}

impl RawSeries {
    /// Builds a series from `(date, value)` pairs in any order.
    pub fn from_observations(
        ticker: impl Into<String>,
        observations: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Self {
        let mut map = IndexMap::new();
        for (date, value) in observations {
            map.insert(date, value);
        }
        map.sort_keys();
        Self {
            ticker: ticker.into(),
            observations: map,
        }
    }

    /// The vendor ticker this series was fetched for.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Observations keyed by date, ascending.
    pub fn observations(&self) -> &IndexMap<NaiveDate, f64> {
        &self.observations
    }

    /// Value on `date`, if the vendor published that date at all.
    ///
    /// Returns `Some(f64::NAN)` for a published-but-null observation, which is
    /// distinct from `None` (date absent).
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.observations.get(&date).copied()
    }

    /// Number of observation dates.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Earliest observation date, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.keys().next().copied()
    }

    /// Latest observation date, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.keys().next_back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn observations_are_sorted_by_date() {
        let series = RawSeries::from_observations(
            "USGG10YR Index",
            vec![
                (day(2024, 1, 3), 4.0),
                (day(2024, 1, 1), 3.9),
                (day(2024, 1, 2), 3.95),
            ],
        );

        let dates: Vec<NaiveDate> = series.observations().keys().copied().collect();
        assert_eq!(
            dates,
            vec![day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)]
        );
        assert_eq!(series.first_date(), Some(day(2024, 1, 1)));
        assert_eq!(series.last_date(), Some(day(2024, 1, 3)));
    }

    #[test]
    fn duplicate_dates_keep_last_value() {
        let series = RawSeries::from_observations(
            "USOSFR10 Curncy",
            vec![(day(2024, 1, 1), 3.5), (day(2024, 1, 1), 3.6)],
        );

        assert_eq!(series.len(), 1);
        assert_eq!(series.value_on(day(2024, 1, 1)), Some(3.6));
    }

    #[test]
    fn null_observation_is_present_as_nan() {
        let series = RawSeries::from_observations(
            "USGG2YR Index",
            vec![(day(2024, 1, 1), f64::NAN), (day(2024, 1, 2), 4.2)],
        );

        assert_eq!(series.len(), 2);
        assert!(series.value_on(day(2024, 1, 1)).unwrap().is_nan());
        assert_eq!(series.value_on(day(2024, 1, 3)), None);
    }

    #[test]
    fn empty_series() {
        let series = RawSeries::from_observations("USGG5YR Index", vec![]);
        assert!(series.is_empty());
        assert_eq!(series.first_date(), None);
        assert_eq!(series.last_date(), None);
    }
}
