use std::path::PathBuf;

use crate::types::TimeSeries;

#[derive(Clone)]
pub struct Config {
    /// The API key sent with every query.
    pub api_key: String,
    /// The ticker symbol to download data for.
    pub symbol: String,
    /// The time series report to request.
    pub series: TimeSeries,
    /// The folder to save the result. The file will be named
    /// `$symbol_$series.csv` and overwritten if present.
    pub output_dir: PathBuf,
    /// Where the saved-defaults file lives. Rewritten in full on every
    /// request.
    pub settings_path: PathBuf,
}
