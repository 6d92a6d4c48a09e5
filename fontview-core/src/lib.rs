//! Fontview Core Library
//!
//! Client-side controller of the font preview browser:
//! - Directory browsing (`DirectoryBrowser`)
//! - Font listings for scanned directories and installed families (`FontListController`)
//! - Viewport-driven lazy loading of names and previews (`ViewportSampler`)
//!
//! Rendering is abstracted behind the [`FontView`] trait and the font server
//! behind [`fontview_client::FontServer`], so the same controller drives the
//! terminal front-end and the tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod services;
pub mod state;
pub mod task;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::BrowserConfig;
pub use controller::BrowserController;
pub use error::{CoreError, CoreResult};
pub use event::{AppEvent, Completion};
pub use state::AppState;
pub use task::TaskQueue;
pub use traits::FontView;
pub use types::{
    DirectoryListing, DirectoryNode, ElementId, FontId, FontRecord, PreviewImage, RowLayout,
    Status, Viewport,
};
