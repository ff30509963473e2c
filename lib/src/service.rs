use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use tokio::fs;
use tracing::{error, info, instrument};

use crate::{
    client::Client,
    config::Config,
    error::{self, Error},
    settings::PersistedSettings,
    types::{
        RetrievalOutcome, RetrievalRequestBuilder, RetrievalResult, TimeSeries,
    },
};

pub struct Service {
    client: Client,
    config: Config,
    in_flight: AtomicBool,
}

impl Service {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::new()?;
        Ok(Self::with_client(config, client))
    }

    /// Pair the config with an already-built client, e.g. one pointed at a
    /// non-production host.
    pub fn with_client(config: Config, client: Client) -> Self {
        Self {
            client,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// One user-initiated retrieval: validate the target directory, persist
    /// the current inputs, fetch, write. Every failure ends the request;
    /// there is no retry.
    #[instrument(skip_all, fields(symbol = %self.config.symbol))]
    pub async fn run(&self) -> RetrievalOutcome {
        match self.execute().await {
            Ok(path) => {
                info!(path = %path.display(), "Data request complete");
                RetrievalOutcome {
                    succeeded: true,
                    error_message: None,
                    written_path: Some(path),
                }
            }
            Err(e) => {
                error!(error = %e, "Data request failed");
                RetrievalOutcome {
                    succeeded: false,
                    error_message: Some(e.to_string()),
                    written_path: None,
                }
            }
        }
    }

    async fn execute(&self) -> Result<PathBuf, Error> {
        // One request at a time per service; the flag holder clears it.
        if self.in_flight.swap(true, Ordering::Acquire) {
            return Err(Error::RequestInFlight);
        }
        let result = self.execute_locked().await;
        self.in_flight.store(false, Ordering::Release);
        result
    }

    async fn execute_locked(&self) -> Result<PathBuf, Error> {
        if !self.config.output_dir.is_dir() {
            return Err(Error::InvalidDirectory(
                self.config.output_dir.display().to_string(),
            ));
        }
        self.save_defaults()?;

        let request = RetrievalRequestBuilder::default()
            .api_key(&self.config.api_key)
            .symbol(&self.config.symbol)
            .series(self.config.series)
            .build()?;
        info!("Data request sent");
        let result = self.client.fetch_series_csv(&request).await?;

        let file_path = self
            .config
            .output_dir
            .join(output_file_name(&self.config.symbol, self.config.series));
        write_result(&result, &file_path).await?;
        Ok(file_path)
    }

    fn save_defaults(&self) -> Result<(), error::Settings> {
        let settings = PersistedSettings {
            api_key: self.config.api_key.clone(),
            symbol: self.config.symbol.clone(),
            time_series: self.config.series.to_string(),
            directory: self.config.output_dir.display().to_string(),
        };
        settings.save(&self.config.settings_path)
    }
}

pub fn output_file_name(symbol: &str, series: TimeSeries) -> String {
    format!("{symbol}_{}.csv", series.file_tag())
}

/// Overwrites `file_path` with the raw payload, verbatim. Calling this with
/// a result whose fetch did not succeed is a contract violation and panics
/// before touching the file.
pub async fn write_result(
    result: &RetrievalResult,
    file_path: &Path,
) -> Result<(), Error> {
    assert!(
        result.succeeded,
        "cannot write data, retrieval was not successful"
    );
    fs::write(file_path, &result.raw_payload)
        .await
        .map_err(error::FileIo::FileWrite)?;
    Ok(())
}
