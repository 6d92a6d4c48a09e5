//! 视口采样服务
//!
//! Decides, for the fonts near the viewport, which names and previews still
//! have to be fetched, and applies the answers.
//!
//! A record is near-visible when its offset `y` relative to the scroll
//! position satisfies `-e·h ≤ y ≤ (1+e)·h`, so one extra viewport height (for
//! `e = 1`) is warmed up above and below what is on screen. Records outside
//! that band are never fetched; they are looked at again when they scroll in.

use std::sync::Arc;

use fontview_client::{ClientError, FontServer, SampleRequest};

use crate::error::CoreResult;
use crate::event::Completion;
use crate::state::{AppState, FontCollection};
use crate::task::TaskQueue;
use crate::traits::FontView;
use crate::types::{ElementId, FontId, PreviewImage, Viewport};

/// 预览图宽度
pub const SAMPLE_WIDTH: u32 = 380;
/// 预览图高度
pub const SAMPLE_HEIGHT: u32 = 50;
/// 默认预热范围（视口高度的倍数）
pub const DEFAULT_EXTENT: f64 = 1.0;

/// Near-visible predicate. Both bounds are inclusive.
pub fn is_near_visible(offset: f64, scroll_offset: f64, viewport_height: f64, extent: f64) -> bool {
    let y = offset - scroll_offset;
    y >= -extent * viewport_height && y <= (1.0 + extent) * viewport_height
}

/// Fetches chosen by one sampler pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplePlan {
    pub names: Vec<FontId>,
    pub samples: Vec<FontId>,
}

impl SamplePlan {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.samples.is_empty()
    }
}

/// 视口采样服务
pub struct ViewportSampler {
    server: Arc<dyn FontServer>,
    extent: f64,
    dedupe_in_flight: bool,
}

impl ViewportSampler {
    /// 创建采样服务实例
    ///
    /// With `dedupe_in_flight` off, a pass that runs before an earlier fetch
    /// has answered fetches the same resource again.
    #[must_use]
    pub fn new(server: Arc<dyn FontServer>, extent: f64, dedupe_in_flight: bool) -> Self {
        Self {
            server,
            extent,
            dedupe_in_flight,
        }
    }

    /// Chooses the fetches for the current scroll position without
    /// touching any state.
    pub fn plan(
        &self,
        fonts: &FontCollection,
        offsets: &[(ElementId, f64)],
        viewport: Viewport,
        revision: u64,
    ) -> SamplePlan {
        let mut plan = SamplePlan::default();
        for &(element, offset) in offsets {
            if !is_near_visible(offset, viewport.scroll_offset, viewport.height, self.extent) {
                continue;
            }
            let Some(record) = fonts.record_for_element(element) else {
                continue;
            };
            if !record.name_resolved && !(self.dedupe_in_flight && record.name_pending) {
                plan.names.push(record.id.clone());
            }
            if !record.sample_fresh
                && !(self.dedupe_in_flight && record.sample_pending == Some(revision))
            {
                plan.samples.push(record.id.clone());
            }
        }
        plan
    }

    /// Runs one pass over a directory listing and spawns the chosen fetches.
    ///
    /// Installed listings and empty state are left alone.
    pub fn refresh(
        &self,
        state: &mut AppState,
        view: &dyn FontView,
        tasks: &mut TaskQueue,
    ) -> SamplePlan {
        if !state.fonts().is_directory_listing() {
            return SamplePlan::default();
        }

        let revision = state.sample.revision();
        let plan = self.plan(state.fonts(), &view.element_offsets(), state.viewport, revision);
        if plan.is_empty() {
            return plan;
        }
        log::debug!(
            "Sampler pass at {:.0}: {} names, {} samples",
            state.viewport.scroll_offset,
            plan.names.len(),
            plan.samples.len()
        );

        let generation = state.fonts().generation();
        let text = state.sample.text().to_string();
        let fonts = state.fonts_mut();

        for id in &plan.names {
            if let Some(record) = fonts.get_mut(id) {
                record.name_pending = true;
            }
            let server = Arc::clone(&self.server);
            let id = id.clone();
            tasks.spawn(async move {
                let result = server.font_name(id.as_str()).await;
                Completion::NameResolved {
                    generation,
                    id,
                    result,
                }
            });
        }

        for id in &plan.samples {
            if let Some(record) = fonts.get_mut(id) {
                record.sample_pending = Some(revision);
            }
            let server = Arc::clone(&self.server);
            let request = SampleRequest {
                font_id: id.as_str().to_string(),
                width: SAMPLE_WIDTH,
                height: SAMPLE_HEIGHT,
                text: text.clone(),
            };
            let id = id.clone();
            tasks.spawn(async move {
                let result = match server.render_sample(&request).await {
                    Ok(bytes) => PreviewImage::decode(bytes),
                    Err(e) => Err(e.into()),
                };
                Completion::SampleRendered {
                    generation,
                    id,
                    revision,
                    result,
                }
            });
        }

        plan
    }

    /// 应用名称解析结果
    ///
    /// Failures are not shown to the user; the record stays unresolved and is
    /// asked for again on a later pass.
    pub fn apply_name(
        &self,
        generation: u64,
        id: &FontId,
        result: Result<String, ClientError>,
        state: &mut AppState,
        view: &mut dyn FontView,
    ) {
        let fonts = state.fonts_mut();
        if fonts.generation() != generation {
            log::debug!("Dropping name of {id} from a replaced listing");
            return;
        }
        let element = fonts.element_of(id);
        let Some(record) = fonts.get_mut(id) else {
            return;
        };
        record.name_pending = false;

        match result {
            Ok(name) => {
                if let Some(element) = element {
                    view.set_label(element, &name);
                }
                record.display_name = Some(name);
                record.name_resolved = true;
            }
            Err(e) => log::debug!("Name of {id} unavailable: {e}"),
        }
    }

    /// 应用预览图结果
    ///
    /// The preview is only swapped in when it was rendered for the current
    /// sample text; otherwise the previous image stays up and the record
    /// remains stale.
    pub fn apply_sample(
        &self,
        generation: u64,
        id: &FontId,
        revision: u64,
        result: CoreResult<PreviewImage>,
        state: &mut AppState,
        view: &mut dyn FontView,
    ) {
        let current_revision = state.sample.revision();
        let fonts = state.fonts_mut();
        if fonts.generation() != generation {
            log::debug!("Dropping preview of {id} from a replaced listing");
            return;
        }
        let element = fonts.element_of(id);
        let Some(record) = fonts.get_mut(id) else {
            return;
        };
        if record.sample_pending == Some(revision) {
            record.sample_pending = None;
        }

        match result {
            Ok(preview) if revision == current_revision => {
                if let Some(element) = element {
                    view.set_preview(element, &preview);
                }
                record.sample_fresh = true;
            }
            Ok(_) => log::debug!("Dropping preview of {id} rendered for superseded text"),
            Err(e) => log::debug!("Preview of {id} unavailable: {e}"),
        }
    }
}
