//! Trait 定义

mod view;

pub use view::FontView;
