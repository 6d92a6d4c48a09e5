//! 界面抽象

use crate::types::{DirectoryListing, ElementId, FontRecord, PreviewImage, Status};

/// Presentation seam between the controller and whatever draws the browser.
///
/// Implementations own all rendering state. The controller only refers to
/// list entries through the [`ElementId`]s returned from
/// [`show_font_list`](Self::show_font_list) and
/// [`show_installed_fonts`](Self::show_installed_fonts).
pub trait FontView {
    /// 显示状态栏（`None` 表示清空）
    fn show_status(&mut self, status: Option<&Status>);

    /// 显示目录浏览列表
    fn show_directory(&mut self, listing: &DirectoryListing);

    /// 隐藏目录浏览列表
    fn hide_directory(&mut self);

    /// 滚动回顶部
    fn scroll_to_top(&mut self);

    /// Replaces the font list with one entry per record, each labelled with
    /// [`FontRecord::label`] and showing a placeholder instead of a preview.
    /// Returns the element of each record, in record order.
    fn show_font_list(&mut self, records: &[FontRecord]) -> Vec<ElementId>;

    /// Replaces the font list with installed families, each preview drawn
    /// locally in its own family with `sample_text`.
    fn show_installed_fonts(&mut self, records: &[FontRecord], sample_text: &str)
        -> Vec<ElementId>;

    /// 清空字体列表
    fn clear_fonts(&mut self);

    /// 更新条目标题
    fn set_label(&mut self, element: ElementId, label: &str);

    /// Swaps the placeholder (or the previous preview) for a decoded image.
    fn set_preview(&mut self, element: ElementId, preview: &PreviewImage);

    /// Redraws every installed-font preview with new text.
    fn set_installed_sample(&mut self, sample_text: &str);

    /// Vertical offset of every font element, measured from the top of the
    /// scrollable area (not from the current scroll position).
    fn element_offsets(&self) -> Vec<(ElementId, f64)>;
}
