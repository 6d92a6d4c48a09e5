//! 目录浏览服务

use std::sync::Arc;

use fontview_client::{ClientError, FontServer, Subdirectory};

use crate::error::CoreError;
use crate::event::Completion;
use crate::state::AppState;
use crate::task::TaskQueue;
use crate::traits::FontView;
use crate::types::DirectoryListing;

/// 目录浏览服务
pub struct DirectoryBrowser {
    server: Arc<dyn FontServer>,
}

impl DirectoryBrowser {
    /// 创建目录浏览服务实例
    #[must_use]
    pub fn new(server: Arc<dyn FontServer>) -> Self {
        Self { server }
    }

    /// Requests the subdirectories of `path`.
    ///
    /// `current_directory` moves to `path` and the status is cleared right
    /// away; the listing is shown when the response arrives.
    pub fn browse(
        &self,
        path: &str,
        state: &mut AppState,
        view: &mut dyn FontView,
        tasks: &mut TaskQueue,
    ) {
        log::debug!("Browsing {path}");
        state.current_directory = path.to_string();
        state.status.clear(view);

        let server = Arc::clone(&self.server);
        let path = path.to_string();
        tasks.spawn(async move {
            let result = server.list_subdirectories(&path).await;
            Completion::Subdirectories { path, result }
        });
    }

    /// 应用子目录请求结果
    pub fn apply(
        &self,
        path: &str,
        result: Result<Vec<Subdirectory>, ClientError>,
        state: &mut AppState,
        view: &mut dyn FontView,
    ) {
        match result {
            Ok(subdirectories) => {
                let listing = DirectoryListing::new(path, subdirectories);
                log::debug!(
                    "{} subdirectories under {path}",
                    listing.children.len()
                );
                state.clear_fonts();
                state.viewport.scroll_offset = 0.0;
                view.clear_fonts();
                view.scroll_to_top();
                view.show_directory(&listing);
            }
            Err(e) => {
                let err = CoreError::from(e);
                log::log!(err.log_level(), "Subdirectory listing for {path} failed: {err}");
                state
                    .status
                    .error(view, "Unable to determine subdirectories.");
            }
        }
    }
}
