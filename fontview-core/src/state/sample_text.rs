//! 预览文本

/// Preview text used until the user submits something else.
pub const DEFAULT_SAMPLE_TEXT: &str = "Sample text";

/// Current preview string plus a revision counter.
///
/// Every submission bumps the revision, even when the text is unchanged, so
/// an image fetched for an older submission can be told apart from one
/// fetched for the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTextStore {
    text: String,
    revision: u64,
}

impl SampleTextStore {
    pub fn new() -> Self {
        Self {
            text: DEFAULT_SAMPLE_TEXT.to_string(),
            revision: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 提交新文本：去掉首尾空白，空串回退为默认文本
    pub fn submit(&mut self, input: &str) -> &str {
        let trimmed = input.trim();
        self.text = if trimmed.is_empty() {
            DEFAULT_SAMPLE_TEXT.to_string()
        } else {
            trimmed.to_string()
        };
        self.revision += 1;
        &self.text
    }
}

impl Default for SampleTextStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_text() {
        let store = SampleTextStore::new();
        assert_eq!(store.text(), DEFAULT_SAMPLE_TEXT);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn submission_is_trimmed() {
        let mut store = SampleTextStore::new();
        assert_eq!(store.submit("  Hamburgefonstiv \n"), "Hamburgefonstiv");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn blank_submission_falls_back_to_default() {
        let mut store = SampleTextStore::new();
        store.submit("Quartz");
        assert_eq!(store.submit("   "), DEFAULT_SAMPLE_TEXT);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn identical_text_still_bumps_revision() {
        let mut store = SampleTextStore::new();
        store.submit("abc");
        store.submit("abc");
        assert_eq!(store.revision(), 2);
    }
}
