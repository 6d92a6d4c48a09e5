//! 顶层控制器
//!
//! Owns [`AppState`], the view and the request queue. User input comes in as
//! [`AppEvent`]s, network answers as [`Completion`]s; each is applied in full
//! before the next one is looked at, so a sampler pass never sees a record
//! halfway through an update.

use std::sync::Arc;

use fontview_client::FontServer;
use tokio::sync::mpsc;

use crate::config::BrowserConfig;
use crate::error::CoreError;
use crate::event::{AppEvent, Completion};
use crate::services::{DirectoryBrowser, FontListController, ViewportSampler};
use crate::state::AppState;
use crate::task::TaskQueue;
use crate::traits::FontView;
use crate::types::Viewport;

/// 字体浏览控制器
pub struct BrowserController<V: FontView> {
    server: Arc<dyn FontServer>,
    state: AppState,
    view: V,
    tasks: TaskQueue,
    browser: DirectoryBrowser,
    fonts: FontListController,
    sampler: ViewportSampler,
}

impl<V: FontView> BrowserController<V> {
    /// 创建控制器（需在 tokio 运行时内使用）
    pub fn new(server: Arc<dyn FontServer>, view: V, config: &BrowserConfig) -> Self {
        Self {
            browser: DirectoryBrowser::new(Arc::clone(&server)),
            fonts: FontListController::new(Arc::clone(&server)),
            sampler: ViewportSampler::new(
                Arc::clone(&server),
                config.extent,
                config.dedupe_in_flight,
            ),
            server,
            state: AppState::new(Viewport::new(config.viewport_height)),
            view,
            tasks: TaskQueue::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// 尚未送达的请求数
    pub fn in_flight(&self) -> usize {
        self.tasks.in_flight()
    }

    /// Entry point: scan the server's font directory if it reports one,
    /// otherwise browse the home directory.
    pub fn start(&mut self) {
        log::info!("Determining initial font directory");
        let server = Arc::clone(&self.server);
        self.tasks
            .spawn(async move { Completion::FontDirectory(server.current_font_dir().await) });
    }

    /// 处理用户输入
    pub fn handle_event(&mut self, event: AppEvent) {
        log::trace!("Event: {event:?}");
        let Self {
            state,
            view,
            tasks,
            browser,
            fonts,
            sampler,
            ..
        } = self;

        match event {
            AppEvent::Browse(path) => browser.browse(&path, state, view, tasks),
            AppEvent::Scan(path) => fonts.load_directory(&path, state, view, tasks),
            AppEvent::FontsInFolder => {
                let path = state.current_directory.clone();
                browser.browse(&path, state, view, tasks);
            }
            AppEvent::InstalledFonts => fonts.load_installed(state, view, tasks),
            AppEvent::SubmitSampleText(text) => {
                fonts.submit_sample_text(&text, state, view, sampler, tasks);
            }
            AppEvent::Scroll(offset) => {
                state.viewport.scroll_offset = offset;
                sampler.refresh(state, view, tasks);
            }
            AppEvent::Resize(height) => {
                state.viewport.height = height;
                sampler.refresh(state, view, tasks);
            }
            AppEvent::PointerEnter(element) => fonts.hover(element, true, state, view),
            AppEvent::PointerLeave(element) => fonts.hover(element, false, state, view),
        }
    }

    /// 应用一个请求结果
    pub fn handle_completion(&mut self, completion: Completion) {
        let Self {
            server,
            state,
            view,
            tasks,
            browser,
            fonts,
            sampler,
        } = self;

        match completion {
            Completion::FontDirectory(Ok(Some(dir))) if !dir.is_empty() => {
                log::info!("Server font directory: {dir}");
                fonts.load_directory(&dir, state, view, tasks);
            }
            Completion::FontDirectory(Ok(_)) => {
                let server = Arc::clone(server);
                tasks.spawn(async move { Completion::HomeDirectory(server.home_dir().await) });
            }
            Completion::FontDirectory(Err(e)) => {
                let err = CoreError::from(e);
                log::log!(err.log_level(), "Font directory lookup failed: {err}");
                state.status.error(view, "Error determining font directory.");
            }
            Completion::HomeDirectory(Ok(dir)) => browser.browse(&dir, state, view, tasks),
            Completion::HomeDirectory(Err(e)) => {
                let err = CoreError::from(e);
                log::log!(err.log_level(), "Home directory lookup failed: {err}");
                state.status.error(view, "Error determining home directory.");
            }
            Completion::Subdirectories { path, result } => {
                browser.apply(&path, result, state, view);
            }
            Completion::FontsScanned { path, result } => {
                fonts.apply_scan(&path, result, state, view, sampler, tasks);
            }
            Completion::InstalledListed(result) => fonts.apply_installed(result, state, view),
            Completion::NameResolved {
                generation,
                id,
                result,
            } => sampler.apply_name(generation, &id, result, state, view),
            Completion::SampleRendered {
                generation,
                id,
                revision,
                result,
            } => sampler.apply_sample(generation, &id, revision, result, state, view),
        }
    }

    /// Waits for the next completion. Pends while nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.tasks.next().await
    }

    /// Applies completions until nothing is in flight any more, including
    /// fetches started by the completions themselves.
    pub async fn settle(&mut self) {
        while self.tasks.in_flight() > 0 {
            match self.tasks.next().await {
                Some(completion) => self.handle_completion(completion),
                None => break,
            }
        }
    }

    /// Event loop: interleaves user events and completions until the event
    /// channel closes.
    pub async fn run(&mut self, mut events: mpsc::UnboundedReceiver<AppEvent>) {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                Some(completion) = self.tasks.next() => self.handle_completion(completion),
            }
        }
        log::debug!("Event channel closed, {} fetches abandoned", self.tasks.in_flight());
    }
}
