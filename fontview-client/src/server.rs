//! HTTP 字体服务端实现

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::FontServer;
use crate::types::{ClientConfig, Endpoint, SampleRequest, ScannedFont, Subdirectory};
use crate::utils::log_sanitizer::sample_text_for_log;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ClientError::NetworkError {
            endpoint: "client".to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// Font server reached over HTTP.
///
/// Every dynamic path segment (directory paths, font ids, sample text) is
/// percent-encoded as one opaque segment, so `/usr/share/fonts` travels as
/// `%2Fusr%2Fshare%2Ffonts`.
pub struct HttpFontServer {
    client: Client,
    base_url: Url,
}

impl HttpFontServer {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = create_http_client(config)?;
        Self::with_client(client, &config.base_url)
    }

    /// Uses an existing client, e.g. one shared with other components.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        // `Url::join` drops the last segment unless the base ends with a slash.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl {
            detail: format!("{base_url}: {e}"),
        })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 构造接口 URL
    pub(crate) fn endpoint_url(&self, endpoint: Endpoint, segments: &[&str]) -> Result<Url> {
        let mut relative = endpoint.name().to_string();
        for segment in segments {
            relative.push('/');
            relative.push_str(&urlencoding::encode(segment));
        }
        self.base_url
            .join(&relative)
            .map_err(|e| ClientError::InvalidUrl {
                detail: format!("{relative}: {e}"),
            })
    }

    async fn get_text(&self, endpoint: Endpoint, segments: &[&str]) -> Result<String> {
        let url = self.endpoint_url(endpoint, segments)?;
        let response =
            HttpUtils::execute_request(self.client.get(url.clone()), endpoint, url.as_str())
                .await?;
        HttpUtils::read_text(response, endpoint).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        segments: &[&str],
    ) -> Result<T> {
        let text = self.get_text(endpoint, segments).await?;
        HttpUtils::parse_json(&text, endpoint)
    }
}

#[async_trait]
impl FontServer for HttpFontServer {
    async fn current_font_dir(&self) -> Result<Option<String>> {
        let dir = self.get_text(Endpoint::CurrentFontDir, &[]).await?;
        let dir = dir.trim();
        Ok((!dir.is_empty()).then(|| dir.to_string()))
    }

    async fn home_dir(&self) -> Result<String> {
        let dir = self.get_text(Endpoint::HomeDir, &[]).await?;
        Ok(dir.trim().to_string())
    }

    async fn list_subdirectories(&self, path: &str) -> Result<Vec<Subdirectory>> {
        self.get_json(Endpoint::Subdirectories, &[path]).await
    }

    async fn scan_fonts(&self, path: &str) -> Result<Vec<ScannedFont>> {
        self.get_json(Endpoint::ScanFonts, &[path]).await
    }

    async fn font_name(&self, font_id: &str) -> Result<String> {
        let name = self.get_text(Endpoint::FontName, &[font_id]).await?;
        Ok(name.trim().to_string())
    }

    async fn render_sample(&self, request: &SampleRequest) -> Result<Vec<u8>> {
        let endpoint = Endpoint::RenderSample;
        let width = request.width.to_string();
        let height = request.height.to_string();
        let url = self.endpoint_url(
            endpoint,
            &[&request.font_id, &width, &height, &request.text],
        )?;
        log::debug!(
            "[{endpoint}] font {} text \"{}\"",
            request.font_id,
            sample_text_for_log(&request.text)
        );
        let response =
            HttpUtils::execute_request(self.client.get(url.clone()), endpoint, url.as_str())
                .await?;
        HttpUtils::read_bytes(response, endpoint).await
    }

    async fn installed_fonts(&self) -> Result<Vec<String>> {
        self.get_json(Endpoint::InstalledFonts, &[]).await
    }
}
