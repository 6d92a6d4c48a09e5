use async_trait::async_trait;

use crate::error::Result;
use crate::types::{SampleRequest, ScannedFont, Subdirectory};

/// 字体服务端 Trait
///
/// One method per server endpoint. Every call is an idempotent read; nothing
/// is cached or retried behind the caller's back.
#[async_trait]
pub trait FontServer: Send + Sync {
    /// 获取服务端当前字体目录（未设置时为 `None`）
    async fn current_font_dir(&self) -> Result<Option<String>>;

    /// 获取用户主目录
    async fn home_dir(&self) -> Result<String>;

    /// 列出目录下的直接子目录
    async fn list_subdirectories(&self, path: &str) -> Result<Vec<Subdirectory>>;

    /// 扫描目录中的字体文件（可能为空）
    async fn scan_fonts(&self, path: &str) -> Result<Vec<ScannedFont>>;

    /// 解析字体的显示名称
    async fn font_name(&self, font_id: &str) -> Result<String>;

    /// 渲染字体预览图，返回完整的图片字节
    async fn render_sample(&self, request: &SampleRequest) -> Result<Vec<u8>>;

    /// 列出主机上已安装的字体族
    async fn installed_fonts(&self) -> Result<Vec<String>>;
}
