//! Generic HTTP client tools
//!
//! One request pipeline shared by every endpoint of [`HttpFontServer`](crate::HttpFontServer):
//! sending, logging, status checking and body decoding.
//!
//! # design principles
//! - **No retries** - a failed request is reported once; the caller decides whether to ask again
//! - **Status before body** - non-2xx answers never reach the decoders
//! - **Bodies are read completely** - image bytes are only handed out once fully received

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::Endpoint;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and returns the response if its status is a success
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `endpoint` - endpoint being called (for logging and error tagging)
    /// * `url` - full URL (for logging)
    ///
    /// # Returns
    /// * `Ok(Response)` - 2xx response, body not yet read
    /// * `Err(ClientError::Timeout | NetworkError)` - transport failure
    /// * `Err(ClientError::HttpStatus)` - any non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: Endpoint,
        url: &str,
    ) -> Result<Response, ClientError> {
        log::debug!("[{endpoint}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    endpoint: endpoint.name().to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    endpoint: endpoint.name().to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{endpoint}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{endpoint}] Request failed (HTTP {})", status.as_u16());
            return Err(ClientError::HttpStatus {
                endpoint: endpoint.name().to_string(),
                status: status.as_u16(),
                body: truncate_for_log(&body),
            });
        }

        Ok(response)
    }

    /// Reads the whole body as text
    pub async fn read_text(response: Response, endpoint: Endpoint) -> Result<String, ClientError> {
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                endpoint: endpoint.name().to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{endpoint}] Response Body: {}", truncate_for_log(&text));
        Ok(text)
    }

    /// Reads the whole body as raw bytes
    pub async fn read_bytes(response: Response, endpoint: Endpoint) -> Result<Vec<u8>, ClientError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::NetworkError {
                endpoint: endpoint.name().to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{endpoint}] Response Body: {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: Endpoint) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            log::error!(
                "[{endpoint}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::ParseError {
                endpoint: endpoint.name().to_string(),
                detail: e.to_string(),
            }
        })
    }
}
