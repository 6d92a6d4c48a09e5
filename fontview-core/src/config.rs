//! 配置

use std::path::{Path, PathBuf};

use fontview_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::services::DEFAULT_EXTENT;

/// 默认视口高度
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
/// 默认行高（标题 + 预览图 + 间距）
pub const DEFAULT_ROW_HEIGHT: f64 = 80.0;

/// Browser configuration, read from JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// 服务端连接配置
    pub server: ClientConfig,
    /// Viewport heights warmed up above and below the visible area
    pub extent: f64,
    /// Skip fonts whose name or preview fetch is still in flight
    pub dedupe_in_flight: bool,
    pub viewport_height: f64,
    pub row_height: f64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            server: ClientConfig::default(),
            extent: DEFAULT_EXTENT,
            dedupe_in_flight: true,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl BrowserConfig {
    /// `<config dir>/fontview/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fontview").join("config.json"))
    }

    /// 从文件加载配置
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else the default location if it exists, else
    /// the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> CoreResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// 校验配置取值
    pub fn validate(&self) -> CoreResult<()> {
        if !self.extent.is_finite() || self.extent < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "extent must be a non-negative number, got {}",
                self.extent
            )));
        }
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "viewport_height must be positive, got {}",
                self.viewport_height
            )));
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        Ok(())
    }
}
