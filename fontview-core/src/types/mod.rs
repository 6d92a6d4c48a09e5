//! 类型定义模块

mod directory;
mod font;
mod preview;
mod status;
mod viewport;

pub use directory::{DirectoryListing, DirectoryNode};
pub use font::{ElementId, FontId, FontRecord, ListingSource};
pub use preview::PreviewImage;
pub use status::Status;
pub use viewport::{RowLayout, Viewport};

// Re-export client 库的公共类型
pub use fontview_client::{SampleRequest, ScannedFont, Subdirectory};
