use std::str::FromStr;

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, instrument};
use url::Url;

use crate::{
    error::{self, Error},
    types::{RetrievalRequest, RetrievalResult},
};

const BASE_URL: &str = "https://www.alphavantage.co";

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> Result<Self, error::Init> {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different host. Everything after the host is
    /// fixed by the query protocol.
    pub fn with_base_url(base_url: &str) -> Result<Self, error::Init> {
        Url::from_str(base_url)
            .map_err(|_| error::Init::InvalidBaseUrl(base_url.to_string()))?;
        let headers = HeaderMap::from_iter([(
            header::ACCEPT,
            HeaderValue::from_static("text/csv"),
        )]);
        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(error::Init::ClientInitialization)?;
        Ok(Self {
            inner,
            base_url: base_url.to_string(),
        })
    }

    #[instrument(skip_all, err, fields(symbol = %request.symbol))]
    pub async fn fetch_series_csv(
        &self,
        request: &RetrievalRequest<'_>,
    ) -> Result<RetrievalResult, Error> {
        let url = Url::from_str(&request_url_at(&self.base_url, request))?;
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(Error::SendRequest)?;
        let status = response.status();
        let raw_payload = response
            .error_for_status()
            .map_err(Error::UnexpectedStatus)?
            .text()
            .await
            .map_err(Error::ResponseBody)?;
        debug!(status = %status, num_bytes = raw_payload.len(), "Got response");
        Ok(RetrievalResult {
            raw_payload,
            succeeded: true,
        })
    }
}

/// Query URL for a request against the production endpoint. Parameters are
/// concatenated verbatim, in the order the upstream API documents them; no
/// percent-encoding is applied.
pub fn request_url(request: &RetrievalRequest<'_>) -> String {
    request_url_at(BASE_URL, request)
}

fn request_url_at(base: &str, request: &RetrievalRequest<'_>) -> String {
    let RetrievalRequest {
        api_key,
        symbol,
        series,
    } = request;
    format!(
        "{base}/query?function={function}&symbol={symbol}&apikey={api_key}&datatype=csv",
        function = series.query_token()
    )
}
