//! 事件与异步完成消息

use fontview_client::{ClientError, ScannedFont, Subdirectory};

use crate::error::CoreResult;
use crate::types::{ElementId, FontId, PreviewImage};

/// User input forwarded by the front-end.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// 进入目录
    Browse(String),
    /// 扫描目录中的字体
    Scan(String),
    /// "Fonts in folder" link: browse the current directory again
    FontsInFolder,
    /// "Installed fonts" link
    InstalledFonts,
    /// 提交预览文本
    SubmitSampleText(String),
    /// New scroll offset of the font list
    Scroll(f64),
    /// New viewport height
    Resize(f64),
    PointerEnter(ElementId),
    PointerLeave(ElementId),
}

/// Result of a spawned fetch, applied by the controller one at a time.
#[derive(Debug)]
pub enum Completion {
    FontDirectory(Result<Option<String>, ClientError>),
    HomeDirectory(Result<String, ClientError>),
    Subdirectories {
        path: String,
        result: Result<Vec<Subdirectory>, ClientError>,
    },
    FontsScanned {
        path: String,
        result: Result<Vec<ScannedFont>, ClientError>,
    },
    InstalledListed(Result<Vec<String>, ClientError>),
    NameResolved {
        generation: u64,
        id: FontId,
        result: Result<String, ClientError>,
    },
    SampleRendered {
        generation: u64,
        id: FontId,
        revision: u64,
        result: CoreResult<PreviewImage>,
    },
}
