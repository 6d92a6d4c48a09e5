//! 状态栏

use crate::traits::FontView;
use crate::types::Status;

/// Holds the status line and mirrors every change to the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReporter {
    current: Option<Status>,
}

impl StatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Status> {
        self.current.as_ref()
    }

    /// 设置普通状态消息
    pub fn info(&mut self, view: &mut dyn FontView, text: impl Into<String>) {
        self.set(view, Some(Status::info(text)));
    }

    /// 设置错误状态消息
    pub fn error(&mut self, view: &mut dyn FontView, text: impl Into<String>) {
        let status = Status::error(text);
        log::debug!("Status: {}", status.text);
        self.set(view, Some(status));
    }

    /// 清除状态消息
    pub fn clear(&mut self, view: &mut dyn FontView) {
        self.set(view, None);
    }

    fn set(&mut self, view: &mut dyn FontView, status: Option<Status>) {
        view.show_status(status.as_ref());
        self.current = status;
    }
}
