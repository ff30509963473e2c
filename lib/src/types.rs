use std::path::PathBuf;

use derive_builder::Builder;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum TimeSeries {
    /// No selection. Maps to an empty query token.
    #[default]
    #[strum(serialize = "")]
    None,
    Intraday,
    Daily,
    #[strum(serialize = "Daily Adjusted")]
    DailyAdjusted,
    Weekly,
    #[strum(serialize = "Weekly Adjusted")]
    WeeklyAdjusted,
    Monthly,
    #[strum(serialize = "Monthly Adjusted")]
    MonthlyAdjusted,
}

impl TimeSeries {
    /// Matches a human-readable label exactly (case-sensitive). Anything
    /// unrecognized degrades to `None` rather than erroring.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::None)
    }

    /// The `function` parameter value Alpha Vantage expects for this series.
    pub fn query_token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Intraday => "TIME_SERIES_INTRADAY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::DailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::WeeklyAdjusted => "TIME_SERIES_WEEKLY_ADJUSTED",
            Self::Monthly => "TIME_SERIES_MONTHLY",
            Self::MonthlyAdjusted => "TIME_SERIES_MONTHLY_ADJUSTED",
        }
    }

    /// Compact rendering used in output file names, e.g. `DailyAdjusted`.
    pub fn file_tag(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Intraday => "Intraday",
            Self::Daily => "Daily",
            Self::DailyAdjusted => "DailyAdjusted",
            Self::Weekly => "Weekly",
            Self::WeeklyAdjusted => "WeeklyAdjusted",
            Self::Monthly => "Monthly",
            Self::MonthlyAdjusted => "MonthlyAdjusted",
        }
    }
}

/// One user-initiated fetch. Built once, never mutated.
#[derive(Builder)]
pub struct RetrievalRequest<'a> {
    pub(crate) api_key: &'a str,
    pub(crate) symbol: &'a str,
    #[builder(default)]
    pub(crate) series: TimeSeries,
}

/// The unparsed CSV text returned by the provider. `succeeded` gates the
/// write step; a result that was never fetched successfully must not reach
/// disk.
#[derive(Debug, Default)]
pub struct RetrievalResult {
    pub raw_payload: String,
    pub succeeded: bool,
}

/// What one retrieval came to, handed back to the caller to present.
#[derive(Debug)]
pub struct RetrievalOutcome {
    pub succeeded: bool,
    pub error_message: Option<String>,
    pub written_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::TimeSeries;

    const PAIRS: [(&str, TimeSeries, &str); 8] = [
        ("", TimeSeries::None, ""),
        ("Intraday", TimeSeries::Intraday, "TIME_SERIES_INTRADAY"),
        ("Daily", TimeSeries::Daily, "TIME_SERIES_DAILY"),
        (
            "Daily Adjusted",
            TimeSeries::DailyAdjusted,
            "TIME_SERIES_DAILY_ADJUSTED",
        ),
        ("Weekly", TimeSeries::Weekly, "TIME_SERIES_WEEKLY"),
        (
            "Weekly Adjusted",
            TimeSeries::WeeklyAdjusted,
            "TIME_SERIES_WEEKLY_ADJUSTED",
        ),
        ("Monthly", TimeSeries::Monthly, "TIME_SERIES_MONTHLY"),
        (
            "Monthly Adjusted",
            TimeSeries::MonthlyAdjusted,
            "TIME_SERIES_MONTHLY_ADJUSTED",
        ),
    ];

    #[test]
    fn label_to_series_to_token() {
        for (label, series, token) in PAIRS {
            assert_eq!(TimeSeries::from_label(label), series);
            assert_eq!(series.query_token(), token);
        }
    }

    #[test]
    fn every_series_label_round_trips() {
        for series in TimeSeries::iter() {
            assert_eq!(TimeSeries::from_label(&series.to_string()), series);
        }
    }

    #[test]
    fn unrecognized_labels_degrade_to_none() {
        for label in ["daily", "DAILY", "Daily  Adjusted", "garbage", " "] {
            assert_eq!(TimeSeries::from_label(label), TimeSeries::None);
        }
    }

    #[test]
    fn file_tag_is_compact() {
        assert_eq!(TimeSeries::DailyAdjusted.file_tag(), "DailyAdjusted");
        assert_eq!(TimeSeries::WeeklyAdjusted.file_tag(), "WeeklyAdjusted");
        assert_eq!(TimeSeries::None.file_tag(), "None");
    }
}
