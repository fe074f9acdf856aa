//! Per-owner species rosters
//!
//! A roster is an ordered list of species *copies*. The container itself
//! allows duplicates; `add` is where the one-entry-per-id policy lives.

mod evolution;
mod filter;

pub use evolution::{evolve, EvolveOutcome};
pub use filter::RosterFilter;

use crate::catalog::SpeciesRecord;
use crate::util::names_match;
use crate::RosterError;

/// Ordered collection of species copies owned by one owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    entries: Vec<SpeciesRecord>,
}

impl Roster {
    /// Empty roster
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// One-element roster holding a starter
    pub fn with_starter(starter: SpeciesRecord) -> Self {
        Self {
            entries: vec![starter],
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in roster order
    pub fn iter(&self) -> std::slice::Iter<'_, SpeciesRecord> {
        self.entries.iter()
    }

    /// Entry at a roster position
    pub fn get(&self, index: usize) -> Option<&SpeciesRecord> {
        self.entries.get(index)
    }

    /// Display names in roster order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Whether an entry with this species id is present
    pub fn contains_id(&self, id: u32) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Position of the first entry whose name matches case-insensitively
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| names_match(&entry.name, name))
    }

    /// First entry whose name matches case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&SpeciesRecord> {
        self.position_of(name).map(|index| &self.entries[index])
    }

    /// Append a copy unless the species id is already present
    pub fn add(&mut self, record: &SpeciesRecord) -> Result<(), RosterError> {
        if self.contains_id(record.id) {
            return Err(RosterError::AlreadyInRoster {
                id: record.id,
                name: record.name.clone(),
            });
        }
        self.entries.push(record.clone());
        Ok(())
    }

    /// Remove the first entry matching `name`, returning it
    ///
    /// Returns `None` when nothing matches; callers attach owner context.
    pub fn release(&mut self, name: &str) -> Option<SpeciesRecord> {
        let index = self.position_of(name)?;
        Some(self.entries.remove(index))
    }

    /// Entries passing a display filter, in roster order
    pub fn filter<'a, 'f>(
        &'a self,
        filter: &'f RosterFilter,
    ) -> impl Iterator<Item = &'a SpeciesRecord> + 'f
    where
        'a: 'f,
    {
        self.entries.iter().filter(move |entry| filter.matches(entry))
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> SpeciesRecord {
        self.entries.remove(index)
    }

    pub(crate) fn push(&mut self, record: SpeciesRecord) {
        self.entries.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<SpeciesRecord> {
        self.entries.pop()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a SpeciesRecord;
    type IntoIter = std::slice::Iter<'a, SpeciesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treecko() -> SpeciesRecord {
        SpeciesRecord::new(1, "Treecko", "GRASS", 40, 45, true)
    }

    fn torchic() -> SpeciesRecord {
        SpeciesRecord::new(4, "Torchic", "FIRE", 45, 60, true)
    }

    #[test]
    fn test_add_rejects_same_id() {
        let mut roster = Roster::with_starter(treecko());
        roster.add(&torchic()).unwrap();
        assert_eq!(roster.len(), 2);

        let err = roster.add(&treecko()).unwrap_err();
        assert_eq!(
            err,
            RosterError::AlreadyInRoster {
                id: 1,
                name: "Treecko".to_string()
            }
        );
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_release_first_match_only() {
        let mut roster = Roster::new();
        roster.push(treecko());
        roster.push(torchic());
        roster.push(treecko());

        let released = roster.release("TREECKO").unwrap();
        assert_eq!(released.id, 1);
        assert_eq!(roster.names(), vec!["Torchic", "Treecko"]);
        assert!(roster.release("Mudkip").is_none());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_copies_are_independent() {
        let original = treecko();
        let mut roster = Roster::with_starter(original.clone());
        roster.entries[0].hp = 999;
        assert_eq!(original.hp, 40);
    }

    #[test]
    fn test_lookup_helpers() {
        let mut roster = Roster::with_starter(treecko());
        roster.add(&torchic()).unwrap();
        assert_eq!(roster.position_of("torchic"), Some(1));
        assert_eq!(roster.find_by_name("treeCKO").map(|r| r.id), Some(1));
        assert!(roster.contains_id(4));
        assert!(!roster.contains_id(7));
    }
}
