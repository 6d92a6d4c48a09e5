//! 字体列表服务

use std::sync::Arc;

use fontview_client::log_sanitizer::sample_text_for_log;
use fontview_client::{ClientError, FontServer, ScannedFont};

use crate::error::CoreError;
use crate::event::Completion;
use crate::services::ViewportSampler;
use crate::state::{AppState, FontCollection};
use crate::task::TaskQueue;
use crate::traits::FontView;
use crate::types::{ElementId, FontRecord, ListingSource};

/// 字体列表服务
///
/// Loads directory scans and installed-font listings into [`AppState`] and
/// routes sample-text submissions and hover events to the active listing.
pub struct FontListController {
    server: Arc<dyn FontServer>,
}

impl FontListController {
    /// 创建字体列表服务实例
    #[must_use]
    pub fn new(server: Arc<dyn FontServer>) -> Self {
        Self { server }
    }

    /// 扫描目录中的字体
    pub fn load_directory(
        &self,
        path: &str,
        state: &mut AppState,
        view: &mut dyn FontView,
        tasks: &mut TaskQueue,
    ) {
        state.current_directory = path.to_string();
        view.hide_directory();
        state
            .status
            .info(view, format!("Scanning for fonts in {path}..."));

        let server = Arc::clone(&self.server);
        let path = path.to_string();
        tasks.spawn(async move {
            let result = server.scan_fonts(&path).await;
            Completion::FontsScanned { path, result }
        });
    }

    /// 应用扫描结果
    pub fn apply_scan(
        &self,
        path: &str,
        result: Result<Vec<ScannedFont>, ClientError>,
        state: &mut AppState,
        view: &mut dyn FontView,
        sampler: &ViewportSampler,
        tasks: &mut TaskQueue,
    ) {
        let fonts = match result {
            Ok(fonts) => fonts,
            Err(e) => {
                let err = CoreError::from(e);
                log::log!(err.log_level(), "Font scan of {path} failed: {err}");
                state.status.error(view, "Could not load font list.");
                return;
            }
        };

        if fonts.is_empty() {
            state.replace_fonts(ListingSource::Directory(path.to_string()), Vec::new());
            view.clear_fonts();
            state.status.info(view, format!("No fonts found in {path}"));
            return;
        }

        let records =
            FontCollection::unique(fonts.into_iter().map(FontRecord::scanned).collect());
        log::info!("Showing {} fonts in {path}", records.len());
        let elements = view.show_font_list(&records);
        state.replace_fonts(ListingSource::Directory(path.to_string()), records);
        state.fonts_mut().bind_elements(elements);
        state.status.info(view, format!("Showing fonts in {path}"));

        sampler.refresh(state, view, tasks);
    }

    /// 加载已安装字体
    pub fn load_installed(
        &self,
        state: &mut AppState,
        view: &mut dyn FontView,
        tasks: &mut TaskQueue,
    ) {
        view.hide_directory();
        state.status.info(view, "Loading installed fonts...");

        let server = Arc::clone(&self.server);
        tasks.spawn(async move { Completion::InstalledListed(server.installed_fonts().await) });
    }

    /// Shows installed families with eagerly drawn previews; nothing is
    /// fetched per font.
    pub fn apply_installed(
        &self,
        result: Result<Vec<String>, ClientError>,
        state: &mut AppState,
        view: &mut dyn FontView,
    ) {
        let families = match result {
            Ok(families) => families,
            Err(e) => {
                let err = CoreError::from(e);
                log::log!(err.log_level(), "Installed font listing failed: {err}");
                state.status.error(view, "Could not load installed fonts.");
                return;
            }
        };

        state.status.info(view, "Showing installed fonts");
        let records =
            FontCollection::unique(families.into_iter().map(FontRecord::installed).collect());
        let elements = view.show_installed_fonts(&records, state.sample.text());
        state.replace_fonts(ListingSource::Installed, records);
        state.fonts_mut().bind_elements(elements);
    }

    /// Stores new sample text and brings the active listing up to date.
    ///
    /// Directory listings get every preview marked stale followed by an
    /// immediate sampler pass; installed listings are redrawn in place.
    pub fn submit_sample_text(
        &self,
        input: &str,
        state: &mut AppState,
        view: &mut dyn FontView,
        sampler: &ViewportSampler,
        tasks: &mut TaskQueue,
    ) {
        state.sample.submit(input);
        log::debug!(
            "Sample text now \"{}\" (revision {})",
            sample_text_for_log(state.sample.text()),
            state.sample.revision()
        );

        if state.fonts().is_directory_listing() {
            state.fonts_mut().invalidate_samples();
            sampler.refresh(state, view, tasks);
        } else if state.fonts().is_installed_listing() {
            view.set_installed_sample(state.sample.text());
        }
    }

    /// Hover swaps a resolved font's label to its file name and back.
    pub fn hover(
        &self,
        element: ElementId,
        entering: bool,
        state: &AppState,
        view: &mut dyn FontView,
    ) {
        let Some(record) = state.fonts().record_for_element(element) else {
            return;
        };
        if !record.name_resolved {
            return;
        }
        let (Some(name), Some(filename)) = (&record.display_name, &record.filename) else {
            return;
        };
        view.set_label(element, if entering { filename } else { name });
    }
}
