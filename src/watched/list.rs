use crate::watched::entry::WatchedEntry;
use crate::watched::summary::WatchedSummary;

/// Ordered watched list. Insertion order is display order.
///
/// Holds at most one entry per IMDb id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchedList {
    entries: Vec<WatchedEntry>,
}

impl WatchedList {
    /// Builds a list from stored entries, keeping the first of any duplicates.
    pub fn from_entries(entries: Vec<WatchedEntry>) -> Self {
        let mut list = Self::default();
        for entry in entries {
            list.add(entry);
        }
        list
    }

    /// Appends `entry` unless its id is already present.
    ///
    /// Returns `false` (and leaves the list untouched) for a duplicate.
    pub fn add(&mut self, entry: WatchedEntry) -> bool {
        if self.contains(&entry.imdb_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes the entry with `imdb_id`. Absent ids are a no-op.
    pub fn remove(&mut self, imdb_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.imdb_id != imdb_id);
        self.entries.len() != before
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.get(imdb_id).is_some()
    }

    pub fn get(&self, imdb_id: &str) -> Option<&WatchedEntry> {
        self.entries.iter().find(|entry| entry.imdb_id == imdb_id)
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary::from_entries(&self.entries)
    }
}
