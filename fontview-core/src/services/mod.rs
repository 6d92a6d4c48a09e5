//! 业务逻辑服务层

mod directory_browser;
mod font_list;
mod sampler;

pub use directory_browser::DirectoryBrowser;
pub use font_list::FontListController;
pub use sampler::{
    is_near_visible, SamplePlan, ViewportSampler, DEFAULT_EXTENT, SAMPLE_HEIGHT, SAMPLE_WIDTH,
};
