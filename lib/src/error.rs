use displaydoc::Display;
use thiserror::Error;

use crate::types::RetrievalRequestBuilderError;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// Init error: {0}
    Init(#[from] Init),
    /// Io: {0}
    File(#[from] FileIo),
    /// Settings store error: {0}
    Settings(#[from] Settings),
    /// URL is not valid
    InvalidUrl(#[from] url::ParseError),
    /// Error sending request: {0}
    SendRequest(reqwest::Error),
    /// Unexpected status code: {0}
    UnexpectedStatus(reqwest::Error),
    /// Failed to read response body: {0}
    ResponseBody(reqwest::Error),
    /// No valid data directory provided: {0}
    InvalidDirectory(String),
    /// A data request is already in flight
    RequestInFlight,
    /// Invalid retrieval request: {0}
    InvalidRequest(#[from] RetrievalRequestBuilderError),
}

#[derive(Debug, Display, Error)]
pub enum Init {
    /// Failed to initialize the client: {0}
    ClientInitialization(reqwest::Error),
    /// Invalid base URL: {0}
    InvalidBaseUrl(String),
}

#[derive(Debug, Display, Error)]
pub enum FileIo {
    /// Error writing file: {0}
    FileWrite(std::io::Error),
    /// Error creating file: {0}
    CreateFile(std::io::Error),
}

#[derive(Debug, Display, Error)]
pub enum Settings {
    /// Failed to serialize settings: {0}
    Serialize(#[from] toml::ser::Error),
    /// Error writing settings file: {0}
    Write(std::io::Error),
}
