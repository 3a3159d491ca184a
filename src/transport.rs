use std::time::Duration;

use bytes::Bytes;

use crate::endpoint::Endpoint;
use crate::error::FdcError;

/// HTTP transport that issues GET requests against the FDC API
///
/// Holds the single `reqwest::Client` built at client construction; stateless
/// beyond that, so it can be shared freely across tasks.
pub(crate) struct HttpTransport {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub(crate) fn new(
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, FdcError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FdcError::Build(e.to_string()))?;

        Ok(Self {
            base_url,
            api_key,
            http_client,
        })
    }

    /// Issue one GET request and return the raw body bytes of a successful
    /// response; every failure mode is classified into an `FdcError`
    pub(crate) async fn get(
        &self,
        endpoint: &Endpoint,
        query: &[(String, String)],
    ) -> Result<Bytes, FdcError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.path()
        );

        tracing::debug!(%url, params = query.len(), "sending FDC request");

        let resp = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FdcError::Timeout(e.to_string())
                } else if e.is_connect() {
                    FdcError::Connection(e.to_string())
                } else {
                    FdcError::Transport(e)
                }
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(FdcError::Transport)?;

        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "FDC response");

        // The API reports key and quota rejections through a JSON error
        // envelope; the envelope is checked regardless of status because its
        // codes are more specific than the status line.
        if let Some(err) = classify_error_body(&body) {
            return Err(err);
        }

        if status.is_success() {
            return Ok(body);
        }

        match status.as_u16() {
            404 => Err(FdcError::NotFound {
                resource: endpoint.resource(),
            }),
            429 => Err(FdcError::RateLimited),
            _ => Err(FdcError::Remote { status, body }),
        }
    }
}

/// Map the Data.gov error envelope to a specific error, if present
///
/// Two envelope shapes exist: rate-limit errors use
/// `{"error": {"code": "..."}}` while parameter errors use
/// `{"errors": {"error": ["..."]}}`.
fn classify_error_body(body: &[u8]) -> Option<FdcError> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;

    let code = value
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(|c| c.as_str())
        .or_else(|| {
            value
                .get("errors")
                .and_then(|e| e.get("error"))
                .and_then(|e| e.get(0))
                .and_then(|c| c.as_str())
        })?;

    match code {
        "OVER_RATE_LIMIT" => Some(FdcError::RateLimited),
        "API_KEY_INVALID" => Some(FdcError::InvalidApiKey),
        _ => None,
    }
}
