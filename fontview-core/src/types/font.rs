//! 字体记录

use std::fmt;

use fontview_client::ScannedFont;
use serde::{Deserialize, Serialize};

/// Opaque font identifier, stable for the lifetime of one listing.
///
/// For installed fonts it is the family name itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(String);

impl FontId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one rendered list entry in a [`FontView`](crate::FontView).
///
/// Views hand these out; the controller maps them back to records without
/// the view ever owning a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the current listing came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// Fonts found by scanning a directory on the server
    Directory(String),
    /// Families installed on the server host
    Installed,
}

/// One font of the active listing.
///
/// `name_resolved` never reverts once set. `sample_fresh` only reverts through
/// [`FontCollection::invalidate_samples`](crate::state::FontCollection::invalidate_samples).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    pub id: FontId,
    /// Raw source file name (scanned fonts only)
    pub filename: Option<String>,
    /// Resolved human-readable name
    pub display_name: Option<String>,
    pub name_resolved: bool,
    pub sample_fresh: bool,
    /// A name fetch has been issued and not yet answered
    pub(crate) name_pending: bool,
    /// Sample text revision of the image fetch in flight, if any
    pub(crate) sample_pending: Option<u64>,
}

impl FontRecord {
    /// Record for a scanned font file: nothing resolved, nothing rendered.
    pub fn scanned(font: ScannedFont) -> Self {
        Self {
            id: FontId(font.id),
            filename: Some(font.filename),
            display_name: None,
            name_resolved: false,
            sample_fresh: false,
            name_pending: false,
            sample_pending: None,
        }
    }

    /// Record for an installed family; the family name is the display name
    /// and previews are rendered locally, so both flags start set.
    pub fn installed(family: String) -> Self {
        Self {
            id: FontId(family.clone()),
            filename: None,
            display_name: Some(family),
            name_resolved: true,
            sample_fresh: true,
            name_pending: false,
            sample_pending: None,
        }
    }

    /// Label to show before any hover: display name, else file name, else id.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.filename.as_deref())
            .unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanned_record_starts_dirty() {
        let record = FontRecord::scanned(ScannedFont {
            id: "1".into(),
            filename: "a.ttf".into(),
        });
        assert!(!record.name_resolved);
        assert!(!record.sample_fresh);
        assert_eq!(record.label(), "a.ttf");
    }

    #[test]
    fn installed_record_uses_family_as_id_and_name() {
        let record = FontRecord::installed("Verdana".into());
        assert_eq!(record.id.as_str(), "Verdana");
        assert!(record.name_resolved);
        assert_eq!(record.label(), "Verdana");
        assert_eq!(record.filename, None);
    }
}
