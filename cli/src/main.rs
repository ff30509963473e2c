use std::{path::PathBuf, time::Duration};

use alphavantage_data::{
    config::Config,
    service::Service,
    settings::{PersistedSettings, SETTINGS_FILE_NAME},
    types::TimeSeries,
};
use anyhow::{bail, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, EnvFilter};

/// CLI tool to download time series data from Alpha Vantage
#[derive(Parser, Debug)]
struct Args {
    /// The ticker symbol to download data for
    #[clap(short, long)]
    symbol: Option<String>,
    /// The time series report to request, by label (e.g. "Daily" or
    /// "Weekly Adjusted")
    #[clap(short = 'r', long)]
    series: Option<String>,
    /// The folder to save the downloaded CSV. Defaults to the directory
    /// of the previous run, then to the documents folder
    #[clap(short, long)]
    output_dir: Option<PathBuf>,
    /// File path of the saved-defaults store
    #[clap(long, default_value = SETTINGS_FILE_NAME)]
    settings: PathBuf,
    #[clap(long, env = "ALPHAVANTAGE_API_KEY")]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let file_appender =
        tracing_appender::rolling::daily(".", "alphavantage-data.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .with(EnvFilter::from_default_env())
        .init();

    let config: Config = args.try_into()?;
    let service = Service::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Data request sent ...");
    let outcome = service.run().await;
    spinner.finish_and_clear();

    match outcome.written_path {
        Some(path) => {
            println!("Data request complete: {}", path.display());
            Ok(())
        }
        None => bail!(outcome
            .error_message
            .unwrap_or_else(|| "data request failed".to_string())),
    }
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let saved = PersistedSettings::load(&args.settings);
        let api_key = args.api_key.unwrap_or_else(|| saved.api_key.clone());
        let symbol = args.symbol.unwrap_or_else(|| saved.symbol.clone());
        if symbol.is_empty() {
            bail!("no symbol provided and none saved from a previous run");
        }
        let series = TimeSeries::from_label(
            args.series.as_deref().unwrap_or(&saved.time_series),
        );
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| saved.directory_or_default());
        Ok(Self {
            api_key,
            symbol,
            series,
            output_dir,
            settings_path: args.settings,
        })
    }
}
