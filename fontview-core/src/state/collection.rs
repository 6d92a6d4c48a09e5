//! 当前字体列表

use std::collections::{HashMap, HashSet};

use crate::types::{ElementId, FontId, FontRecord, ListingSource};

/// The records of the active listing plus the element back-references a
/// view handed out for them.
///
/// A collection is never edited into another listing: loading a new listing
/// builds a new collection with a higher generation.
#[derive(Debug, Clone, Default)]
pub struct FontCollection {
    generation: u64,
    source: Option<ListingSource>,
    records: Vec<FontRecord>,
    index: HashMap<FontId, usize>,
    elements: Vec<Option<ElementId>>,
    element_index: HashMap<ElementId, usize>,
}

impl FontCollection {
    /// Keeps the first record of every id.
    pub(crate) fn unique(records: Vec<FontRecord>) -> Vec<FontRecord> {
        let total = records.len();
        let mut seen = HashSet::new();
        let unique: Vec<FontRecord> = records
            .into_iter()
            .filter(|record| seen.insert(record.id.clone()))
            .collect();
        if unique.len() < total {
            log::warn!("Dropped {} fonts with duplicate ids", total - unique.len());
        }
        unique
    }

    pub(crate) fn new(
        generation: u64,
        source: Option<ListingSource>,
        records: Vec<FontRecord>,
    ) -> Self {
        let mut index = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            index.entry(record.id.clone()).or_insert(i);
        }
        Self {
            generation,
            source,
            elements: vec![None; records.len()],
            records,
            index,
            element_index: HashMap::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_directory_listing(&self) -> bool {
        matches!(self.source, Some(ListingSource::Directory(_)))
    }

    pub fn is_installed_listing(&self) -> bool {
        matches!(self.source, Some(ListingSource::Installed))
    }

    pub fn records(&self) -> &[FontRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &FontId) -> Option<&FontRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub(crate) fn get_mut(&mut self, id: &FontId) -> Option<&mut FontRecord> {
        self.index.get(id).map(|&i| &mut self.records[i])
    }

    /// Associates view elements with records, position by position.
    pub(crate) fn bind_elements(&mut self, elements: Vec<ElementId>) {
        if elements.len() != self.records.len() {
            log::warn!(
                "View returned {} elements for {} fonts",
                elements.len(),
                self.records.len()
            );
        }
        self.element_index.clear();
        self.elements = vec![None; self.records.len()];
        for (i, element) in elements.into_iter().take(self.records.len()).enumerate() {
            self.elements[i] = Some(element);
            self.element_index.insert(element, i);
        }
    }

    pub fn element_of(&self, id: &FontId) -> Option<ElementId> {
        self.index.get(id).and_then(|&i| self.elements[i])
    }

    pub fn record_for_element(&self, element: ElementId) -> Option<&FontRecord> {
        self.element_index.get(&element).map(|&i| &self.records[i])
    }

    /// Marks every sample stale; names are left alone.
    pub(crate) fn invalidate_samples(&mut self) {
        for record in &mut self.records {
            record.sample_fresh = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScannedFont;

    fn scanned(id: &str, filename: &str) -> FontRecord {
        FontRecord::scanned(ScannedFont {
            id: id.into(),
            filename: filename.into(),
        })
    }

    #[test]
    fn elements_map_back_to_records() {
        let mut fonts = FontCollection::new(
            1,
            Some(ListingSource::Directory("/fonts".into())),
            vec![scanned("1", "a.ttf"), scanned("2", "b.ttf")],
        );
        fonts.bind_elements(vec![ElementId(10), ElementId(11)]);

        let record = fonts.record_for_element(ElementId(11));
        assert_eq!(record.map(|r| r.id.as_str()), Some("2"));
        assert_eq!(fonts.element_of(&FontId::new("1")), Some(ElementId(10)));
        assert!(fonts.record_for_element(ElementId(12)).is_none());
    }

    #[test]
    fn repeated_ids_keep_first_record() {
        let records = FontCollection::unique(vec![
            scanned("1", "a.ttf"),
            scanned("2", "b.ttf"),
            scanned("1", "a-copy.ttf"),
        ]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename.as_deref(), Some("a.ttf"));
        assert_eq!(records[1].id.as_str(), "2");
    }

    #[test]
    fn invalidation_only_touches_samples() {
        let mut fonts = FontCollection::new(
            1,
            Some(ListingSource::Directory("/fonts".into())),
            vec![scanned("1", "a.ttf"), scanned("2", "b.ttf")],
        );
        for record in &mut fonts.records {
            record.name_resolved = true;
            record.sample_fresh = true;
        }

        fonts.invalidate_samples();

        assert!(fonts.records().iter().all(|r| r.name_resolved));
        assert!(fonts.records().iter().all(|r| !r.sample_fresh));
    }
}
