//! 视口

/// Scroll position and visible height of the font list, in view units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self {
            scroll_offset: 0.0,
            height,
        }
    }
}

/// Fixed-height row layout for list views.
///
/// Row `i` starts at `top + i * row_height`, measured from the top of the
/// scrollable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub top: f64,
    pub row_height: f64,
}

impl RowLayout {
    pub fn new(top: f64, row_height: f64) -> Self {
        Self { top, row_height }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn offset_of(&self, index: usize) -> f64 {
        self.top + index as f64 * self.row_height
    }
}
