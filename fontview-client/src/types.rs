use serde::{Deserialize, Serialize};

/// 服务端接口标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Directory the server was started in, possibly empty
    CurrentFontDir,
    /// Home directory of the user running the server
    HomeDir,
    /// Immediate subdirectories of a directory
    Subdirectories,
    /// Font files found by scanning a directory
    ScanFonts,
    /// Human-readable name of one scanned font
    FontName,
    /// Rendered preview image for one scanned font
    RenderSample,
    /// Font families installed on the server host
    InstalledFonts,
}

impl Endpoint {
    /// First path segment of the endpoint, also used as the log/error tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CurrentFontDir => "fontdir",
            Self::HomeDir => "homedir",
            Self::Subdirectories => "subdirs",
            Self::ScanFonts => "fonts",
            Self::FontName => "fontname",
            Self::RenderSample => "sample",
            Self::InstalledFonts => "installed",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 子目录条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdirectory {
    /// Label shown to the user (usually the last path component)
    pub name: String,
    /// Full path to browse into
    pub path: String,
}

/// 扫描目录得到的字体文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFont {
    /// Opaque identifier, valid for the lifetime of the server-side listing
    pub id: String,
    /// Raw file name of the font
    pub filename: String,
}

/// Parameters of a preview render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRequest {
    pub font_id: String,
    pub width: u32,
    pub height: u32,
    pub text: String,
}

/// Connection settings for [`HttpFontServer`](crate::HttpFontServer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is resolved against
    pub base_url: String,
    /// 连接超时（秒）
    pub connect_timeout_secs: u64,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
}

/// 默认服务端地址
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
