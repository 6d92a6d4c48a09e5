//! 终端界面
//!
//! Prints every view update as a line of text. Font rows are laid out with a
//! fixed row height so the sampler sees the same geometry a graphical list
//! would have.

use std::io::Write;

use fontview_core::types::{
    DirectoryListing, ElementId, FontRecord, PreviewImage, RowLayout, Status,
};
use fontview_core::FontView;

struct Row {
    element: ElementId,
    label: String,
    /// 预览图尺寸，`None` 表示仍为占位图
    preview: Option<(u32, u32)>,
}

/// 终端视图
pub struct TerminalView<W: Write> {
    out: W,
    layout: RowLayout,
    next_element: u64,
    rows: Vec<Row>,
    directory: Option<DirectoryListing>,
    installed_sample: Option<String>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, row_height: f64) -> Self {
        Self {
            out,
            layout: RowLayout::new(0.0, row_height),
            next_element: 0,
            rows: Vec::new(),
            directory: None,
            installed_sample: None,
        }
    }

    /// Path behind entry `n` of the last directory listing. Entry 0 is the
    /// scan entry and maps to the listed directory itself.
    pub fn directory_entry(&self, n: usize) -> Option<&str> {
        let listing = self.directory.as_ref()?;
        match n {
            0 => Some(listing.path.as_str()),
            n => listing.children.get(n - 1).map(|c| c.path.as_str()),
        }
    }

    /// 第 `n` 行（从 1 开始）对应的元素
    pub fn element_at(&self, n: usize) -> Option<ElementId> {
        n.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|r| r.element)
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// 打印完整字体列表
    pub fn print_list(&mut self) {
        if self.rows.is_empty() {
            self.emit(format_args!("(no fonts)"));
            return;
        }
        let lines: Vec<String> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let text = Self::describe(row, self.installed_sample.as_deref());
                format!("{:>4}  {text}", i + 1)
            })
            .collect();
        for line in lines {
            self.emit(format_args!("{line}"));
        }
    }

    /// 打印一行文本
    pub fn print(&mut self, text: &str) {
        self.emit(format_args!("{text}"));
    }

    fn describe(row: &Row, installed_sample: Option<&str>) -> String {
        match (row.preview, installed_sample) {
            (Some((w, h)), _) => format!("{} [preview {w}x{h}]", row.label),
            (None, Some(sample)) => format!("{} [\"{sample}\"]", row.label),
            (None, None) => format!("{} [loading]", row.label),
        }
    }

    fn row_number(&self, element: ElementId) -> Option<usize> {
        self.rows.iter().position(|r| r.element == element).map(|i| i + 1)
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to write to terminal: {e}");
        }
    }

    fn replace_rows(&mut self, records: &[FontRecord]) -> Vec<ElementId> {
        self.rows.clear();
        for record in records {
            self.next_element += 1;
            self.rows.push(Row {
                element: ElementId(self.next_element),
                label: record.label().to_string(),
                preview: None,
            });
        }
        self.rows.iter().map(|r| r.element).collect()
    }
}

impl<W: Write> FontView for TerminalView<W> {
    fn show_status(&mut self, status: Option<&Status>) {
        match status {
            Some(s) if s.is_error => self.emit(format_args!("! {}", s.text)),
            Some(s) => self.emit(format_args!("* {}", s.text)),
            None => {}
        }
    }

    fn show_directory(&mut self, listing: &DirectoryListing) {
        self.emit(format_args!("{}", listing.path));
        self.emit(format_args!("{:>4}  {}", 0, listing.scan_label));
        for (i, child) in listing.children.iter().enumerate() {
            self.emit(format_args!("{:>4}  {}/", i + 1, child.display_label));
        }
        self.directory = Some(listing.clone());
    }

    fn hide_directory(&mut self) {
        self.directory = None;
    }

    fn scroll_to_top(&mut self) {}

    fn show_font_list(&mut self, records: &[FontRecord]) -> Vec<ElementId> {
        self.installed_sample = None;
        let elements = self.replace_rows(records);
        self.print_list();
        elements
    }

    fn show_installed_fonts(
        &mut self,
        records: &[FontRecord],
        sample_text: &str,
    ) -> Vec<ElementId> {
        self.installed_sample = Some(sample_text.to_string());
        let elements = self.replace_rows(records);
        self.print_list();
        elements
    }

    fn clear_fonts(&mut self) {
        self.rows.clear();
        self.installed_sample = None;
    }

    fn set_label(&mut self, element: ElementId, label: &str) {
        let Some(n) = self.row_number(element) else {
            return;
        };
        self.rows[n - 1].label = label.to_string();
        self.emit(format_args!("{n:>4}  {label}"));
    }

    fn set_preview(&mut self, element: ElementId, preview: &PreviewImage) {
        let Some(n) = self.row_number(element) else {
            return;
        };
        let size = (preview.width(), preview.height());
        self.rows[n - 1].preview = Some(size);
        let label = self.rows[n - 1].label.clone();
        self.emit(format_args!(
            "{n:>4}  {label} [preview {}x{} {:?}, {} bytes]",
            size.0,
            size.1,
            preview.format(),
            preview.bytes().len()
        ));
    }

    fn set_installed_sample(&mut self, sample_text: &str) {
        self.installed_sample = Some(sample_text.to_string());
        self.print_list();
    }

    fn element_offsets(&self) -> Vec<(ElementId, f64)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (r.element, self.layout.offset_of(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontview_core::types::{ScannedFont, Subdirectory};

    fn view() -> TerminalView<Vec<u8>> {
        TerminalView::new(Vec::new(), 80.0)
    }

    fn output(view: &TerminalView<Vec<u8>>) -> String {
        String::from_utf8_lossy(view.writer()).into_owned()
    }

    fn scanned(id: &str, filename: &str) -> FontRecord {
        FontRecord::scanned(ScannedFont {
            id: id.into(),
            filename: filename.into(),
        })
    }

    #[test]
    fn directory_entries_resolve_to_paths() {
        let mut view = view();
        let listing = DirectoryListing::new(
            "/home/ada",
            vec![Subdirectory {
                name: "fonts".into(),
                path: "/home/ada/fonts".into(),
            }],
        );
        view.show_directory(&listing);

        assert_eq!(view.directory_entry(0), Some("/home/ada"));
        assert_eq!(view.directory_entry(1), Some("/home/ada/fonts"));
        assert_eq!(view.directory_entry(2), None);

        view.hide_directory();
        assert_eq!(view.directory_entry(0), None);

        let out = output(&view);
        assert!(out.contains("Scan /home/ada"));
        assert!(out.contains("fonts/"));
    }

    #[test]
    fn rows_are_laid_out_by_row_height() {
        let mut view = view();
        let elements = view.show_font_list(&[scanned("1", "a.ttf"), scanned("2", "b.ttf")]);

        let offsets = view.element_offsets();
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets[1].0, elements[1]);
        assert!((offsets[1].1 - 80.0).abs() < f64::EPSILON);
        assert_eq!(view.element_at(2), Some(elements[1]));
        assert_eq!(view.element_at(0), None);
    }

    #[test]
    fn label_updates_are_printed() {
        let mut view = view();
        let elements = view.show_font_list(&[scanned("1", "a.ttf")]);
        view.set_label(elements[0], "Alpha Sans");
        view.show_status(Some(&Status::error("Could not load font list.")));

        let out = output(&view);
        assert!(out.contains("a.ttf [loading]"));
        assert!(out.contains("Alpha Sans"));
        assert!(out.contains("! Could not load font list."));
    }

    #[test]
    fn stale_elements_are_ignored() {
        let mut view = view();
        let old = view.show_font_list(&[scanned("1", "a.ttf")]);
        view.clear_fonts();
        view.set_label(old[0], "Gone");
        assert!(view.element_offsets().is_empty());
    }
}
