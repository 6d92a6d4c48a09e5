//! 应用状态

mod collection;
mod sample_text;
mod status;

pub use collection::FontCollection;
pub use sample_text::{SampleTextStore, DEFAULT_SAMPLE_TEXT};
pub use status::StatusReporter;

use crate::types::{FontRecord, ListingSource, Viewport};

/// 初始浏览目录
pub const INITIAL_DIRECTORY: &str = "/";

/// Process-wide browser state, owned by [`BrowserController`](crate::BrowserController)
/// and lent to each component for the duration of one operation.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory currently being browsed or scanned
    pub current_directory: String,
    pub sample: SampleTextStore,
    pub status: StatusReporter,
    pub viewport: Viewport,
    fonts: FontCollection,
    last_generation: u64,
}

impl AppState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            current_directory: INITIAL_DIRECTORY.to_string(),
            sample: SampleTextStore::new(),
            status: StatusReporter::new(),
            viewport,
            fonts: FontCollection::default(),
            last_generation: 0,
        }
    }

    pub fn fonts(&self) -> &FontCollection {
        &self.fonts
    }

    pub(crate) fn fonts_mut(&mut self) -> &mut FontCollection {
        &mut self.fonts
    }

    /// 整体替换字体列表，返回新列表的代号
    pub(crate) fn replace_fonts(
        &mut self,
        source: ListingSource,
        records: Vec<FontRecord>,
    ) -> u64 {
        self.last_generation += 1;
        self.fonts = FontCollection::new(self.last_generation, Some(source), records);
        self.last_generation
    }

    /// 丢弃字体列表（进入目录浏览时）
    pub(crate) fn clear_fonts(&mut self) {
        self.last_generation += 1;
        self.fonts = FontCollection::new(self.last_generation, None, Vec::new());
    }
}
