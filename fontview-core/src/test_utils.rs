//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use fontview_client::{
    ClientError, Endpoint, FontServer, Result, SampleRequest, ScannedFont, Subdirectory,
};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::config::BrowserConfig;
use crate::state::AppState;
use crate::traits::FontView;
use crate::types::{
    DirectoryListing, ElementId, FontRecord, ListingSource, PreviewImage, RowLayout, Status,
    Viewport,
};

// ===== MockFontServer =====

/// In-memory font server. Unknown directories list as empty, unknown fonts
/// resolve to `Font <id>`, samples are solid PNGs of the requested size.
pub struct MockFontServer {
    font_dir: Option<String>,
    home: String,
    subdirs: HashMap<String, Vec<Subdirectory>>,
    scans: HashMap<String, Vec<ScannedFont>>,
    names: HashMap<String, String>,
    installed: Vec<String>,
    failing: HashSet<Endpoint>,
    calls: Mutex<HashMap<Endpoint, usize>>,
    sample_requests: Mutex<Vec<SampleRequest>>,
}

impl MockFontServer {
    pub fn new() -> Self {
        Self {
            font_dir: None,
            home: "/home/test".to_string(),
            subdirs: HashMap::new(),
            scans: HashMap::new(),
            names: HashMap::new(),
            installed: Vec::new(),
            failing: HashSet::new(),
            calls: Mutex::new(HashMap::new()),
            sample_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_font_dir(mut self, dir: Option<&str>) -> Self {
        self.font_dir = dir.map(str::to_string);
        self
    }

    pub fn with_home(mut self, home: &str) -> Self {
        self.home = home.to_string();
        self
    }

    pub fn with_subdirs(mut self, path: &str, subdirs: Vec<Subdirectory>) -> Self {
        self.subdirs.insert(path.to_string(), subdirs);
        self
    }

    pub fn with_scan(mut self, path: &str, fonts: Vec<ScannedFont>) -> Self {
        self.scans.insert(path.to_string(), fonts);
        self
    }

    pub fn with_name(mut self, font_id: &str, name: &str) -> Self {
        self.names.insert(font_id.to_string(), name.to_string());
        self
    }

    pub fn with_installed(mut self, families: Vec<&str>) -> Self {
        self.installed = families.into_iter().map(str::to_string).collect();
        self
    }

    /// 让指定接口始终返回网络错误
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// 指定接口被调用的次数
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .expect("mock lock")
            .get(&endpoint)
            .copied()
            .unwrap_or(0)
    }

    /// Sample requests as `(font id, width, height, text)`, sorted by font id.
    pub fn sample_requests(&self) -> Vec<(String, u32, u32, String)> {
        let mut requests: Vec<_> = self
            .sample_requests
            .lock()
            .expect("mock lock")
            .iter()
            .map(|r| (r.font_id.clone(), r.width, r.height, r.text.clone()))
            .collect();
        requests.sort();
        requests
    }

    fn record(&self, endpoint: Endpoint) -> Result<()> {
        *self
            .calls
            .lock()
            .expect("mock lock")
            .entry(endpoint)
            .or_insert(0) += 1;
        if self.failing.contains(&endpoint) {
            return Err(ClientError::NetworkError {
                endpoint: endpoint.name().to_string(),
                detail: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FontServer for MockFontServer {
    async fn current_font_dir(&self) -> Result<Option<String>> {
        self.record(Endpoint::CurrentFontDir)?;
        Ok(self.font_dir.clone())
    }

    async fn home_dir(&self) -> Result<String> {
        self.record(Endpoint::HomeDir)?;
        Ok(self.home.clone())
    }

    async fn list_subdirectories(&self, path: &str) -> Result<Vec<Subdirectory>> {
        self.record(Endpoint::Subdirectories)?;
        Ok(self.subdirs.get(path).cloned().unwrap_or_default())
    }

    async fn scan_fonts(&self, path: &str) -> Result<Vec<ScannedFont>> {
        self.record(Endpoint::ScanFonts)?;
        Ok(self.scans.get(path).cloned().unwrap_or_default())
    }

    async fn font_name(&self, font_id: &str) -> Result<String> {
        self.record(Endpoint::FontName)?;
        Ok(self
            .names
            .get(font_id)
            .cloned()
            .unwrap_or_else(|| format!("Font {font_id}")))
    }

    async fn render_sample(&self, request: &SampleRequest) -> Result<Vec<u8>> {
        self.sample_requests
            .lock()
            .expect("mock lock")
            .push(request.clone());
        self.record(Endpoint::RenderSample)?;
        Ok(png_bytes(request.width, request.height))
    }

    async fn installed_fonts(&self) -> Result<Vec<String>> {
        self.record(Endpoint::InstalledFonts)?;
        Ok(self.installed.clone())
    }
}

// ===== MockView =====

/// Records what the controller asked to draw. Font rows are laid out
/// 80 units apart from the top of the list.
pub struct MockView {
    layout: RowLayout,
    next_element: u64,
    pub status: Option<Status>,
    pub directory: Option<DirectoryListing>,
    pub directory_visible: bool,
    pub scrolled_to_top: usize,
    pub elements: Vec<ElementId>,
    pub labels: HashMap<ElementId, String>,
    /// 已替换的预览图尺寸
    pub previews: HashMap<ElementId, (u32, u32)>,
    pub installed_sample: Option<String>,
}

impl MockView {
    pub fn new() -> Self {
        Self {
            layout: RowLayout::new(0.0, 80.0),
            next_element: 0,
            status: None,
            directory: None,
            directory_visible: false,
            scrolled_to_top: 0,
            elements: Vec::new(),
            labels: HashMap::new(),
            previews: HashMap::new(),
            installed_sample: None,
        }
    }

    /// 按显示顺序返回标题
    pub fn labels_in_order(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| self.labels.get(e).map(String::as_str))
            .collect()
    }

    fn replace_rows<'a>(&mut self, labels: impl Iterator<Item = &'a str>) -> Vec<ElementId> {
        self.clear_fonts();
        for label in labels {
            self.next_element += 1;
            let element = ElementId(self.next_element);
            self.elements.push(element);
            self.labels.insert(element, label.to_string());
        }
        self.elements.clone()
    }
}

impl FontView for MockView {
    fn show_status(&mut self, status: Option<&Status>) {
        self.status = status.cloned();
    }

    fn show_directory(&mut self, listing: &DirectoryListing) {
        self.directory = Some(listing.clone());
        self.directory_visible = true;
    }

    fn hide_directory(&mut self) {
        self.directory_visible = false;
    }

    fn scroll_to_top(&mut self) {
        self.scrolled_to_top += 1;
    }

    fn show_font_list(&mut self, records: &[FontRecord]) -> Vec<ElementId> {
        self.replace_rows(records.iter().map(FontRecord::label))
    }

    fn show_installed_fonts(
        &mut self,
        records: &[FontRecord],
        sample_text: &str,
    ) -> Vec<ElementId> {
        let elements = self.replace_rows(records.iter().map(FontRecord::label));
        self.installed_sample = Some(sample_text.to_string());
        elements
    }

    fn clear_fonts(&mut self) {
        self.elements.clear();
        self.labels.clear();
        self.previews.clear();
        self.installed_sample = None;
    }

    fn set_label(&mut self, element: ElementId, label: &str) {
        self.labels.insert(element, label.to_string());
    }

    fn set_preview(&mut self, element: ElementId, preview: &PreviewImage) {
        self.previews
            .insert(element, (preview.width(), preview.height()));
    }

    fn set_installed_sample(&mut self, sample_text: &str) {
        self.installed_sample = Some(sample_text.to_string());
    }

    fn element_offsets(&self) -> Vec<(ElementId, f64)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, self.layout.offset_of(i)))
            .collect()
    }
}

// ===== 工厂方法 =====

/// 600 高的视口，滚动位置 0
pub fn fixture_state() -> AppState {
    AppState::new(Viewport::new(600.0))
}

/// 与 [`fixture_state`] 相同视口高度的配置
pub fn test_config() -> BrowserConfig {
    BrowserConfig {
        viewport_height: 600.0,
        ..BrowserConfig::default()
    }
}

/// Shows a `/fonts` listing with one `<id>.ttf` record per id and returns
/// its generation.
pub fn load_scanned<S: AsRef<str>>(state: &mut AppState, view: &mut MockView, ids: &[S]) -> u64 {
    let records: Vec<FontRecord> = ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            FontRecord::scanned(font(id, &format!("{id}.ttf")))
        })
        .collect();
    let elements = view.show_font_list(&records);
    let generation = state.replace_fonts(ListingSource::Directory("/fonts".to_string()), records);
    state.fonts_mut().bind_elements(elements);
    generation
}

pub fn font(id: &str, filename: &str) -> ScannedFont {
    ScannedFont {
        id: id.to_string(),
        filename: filename.to_string(),
    }
}

pub fn dir(name: &str, path: &str) -> Subdirectory {
    Subdirectory {
        name: name.to_string(),
        path: path.to_string(),
    }
}

/// 纯色 PNG 图片字节
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([20, 20, 20, 255]));
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}
