//! 目录浏览类型

use fontview_client::Subdirectory;

/// One navigable subdirectory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub path: String,
    pub display_label: String,
}

impl From<Subdirectory> for DirectoryNode {
    fn from(dir: Subdirectory) -> Self {
        Self {
            path: dir.path,
            display_label: dir.name,
        }
    }
}

/// What the browser shows for one directory: a "scan this directory" entry
/// followed by one entry per subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub path: String,
    pub scan_label: String,
    pub children: Vec<DirectoryNode>,
}

impl DirectoryListing {
    pub fn new(path: &str, subdirectories: Vec<Subdirectory>) -> Self {
        Self {
            path: path.to_string(),
            scan_label: format!("Scan {path}"),
            children: subdirectories.into_iter().map(DirectoryNode::from).collect(),
        }
    }
}
