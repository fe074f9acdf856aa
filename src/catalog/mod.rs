//! Species catalog
//!
//! Immutable, id-ordered list of species records loaded once at startup.
//! Record `i` (0-based) always carries id `i + 1`, so lookup by id is a
//! plain index; lookup by name is a linear case-insensitive scan.

mod loader;

pub use loader::{load_catalog, parse_catalog, CatalogError};

use std::fmt;

use crate::roster::RosterFilter;
use crate::util::names_match;
use crate::RosterError;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesRecord {
    /// 1-based, dense catalog id
    pub id: u32,

    /// Display name
    pub name: String,

    /// Type tag, e.g. `GRASS`
    pub kind: String,

    /// Hit points
    pub hp: i32,

    /// Attack stat
    pub attack: i32,

    /// Whether the species has a successor at `id + 1`
    pub can_evolve: bool,
}

impl SpeciesRecord {
    /// Construct a record
    pub fn new(
        id: u32,
        name: impl Into<String>,
        kind: impl Into<String>,
        hp: i32,
        attack: i32,
        can_evolve: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            hp,
            attack,
            can_evolve,
        }
    }

    /// Id of the evolved form, if this species can evolve
    pub fn successor_id(&self) -> Option<u32> {
        self.can_evolve.then(|| self.id + 1)
    }
}

impl fmt::Display for SpeciesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Type: {}, HP: {}, Attack: {}, Can Evolve: {}",
            self.id,
            self.name,
            self.kind,
            self.hp,
            self.attack,
            if self.can_evolve { "TRUE" } else { "FALSE" }
        )
    }
}

/// Immutable species catalog indexed by id
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<SpeciesRecord>,
}

impl Catalog {
    /// Build a catalog, checking that ids run densely from 1
    pub fn new(records: Vec<SpeciesRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            let expected = index as u32 + 1;
            if record.id != expected {
                return Err(CatalogError::NonContiguousId {
                    expected,
                    found: record.id,
                });
            }
        }
        Ok(Self { records })
    }

    /// Number of records (equals the largest id)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// O(1) lookup; valid for `1 <= id <= len`
    pub fn lookup_by_id(&self, id: u32) -> Result<&SpeciesRecord, RosterError> {
        id.checked_sub(1)
            .and_then(|index| self.records.get(index as usize))
            .ok_or(RosterError::SpeciesIdNotFound(id))
    }

    /// Case-insensitive scan, first match by ascending id
    pub fn lookup_by_name(&self, name: &str) -> Result<&SpeciesRecord, RosterError> {
        self.records
            .iter()
            .find(|record| names_match(&record.name, name))
            .ok_or_else(|| RosterError::SpeciesNotFound(name.to_string()))
    }

    /// Records in id order
    pub fn iter(&self) -> std::slice::Iter<'_, SpeciesRecord> {
        self.records.iter()
    }

    /// Records matching a display filter, in id order
    pub fn filter<'a, 'f>(
        &'a self,
        filter: &'f RosterFilter,
    ) -> impl Iterator<Item = &'a SpeciesRecord> + 'f
    where
        'a: 'f,
    {
        self.records.iter().filter(move |record| filter.matches(record))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SpeciesRecord;
    type IntoIter = std::slice::Iter<'a, SpeciesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
