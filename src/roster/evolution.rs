//! Evolution rule
//!
//! Eligibility comes from the catalog record, not the roster copy.
//! The evolved form is always the catalog entry at `id + 1`.
//!
//! Steps:
//! 1. Resolve the species by name in the catalog
//! 2. Reject if the catalog marks it non-evolvable
//! 3. Resolve the successor by id
//! 4. Locate the named entry in the roster (absent = error)
//! 5. Remove it, append the successor copy
//! 6. If the successor id was already present, drop the appended copy

use std::fmt;

use super::Roster;
use crate::catalog::{Catalog, SpeciesRecord};
use crate::RosterError;

/// What happened to the roster after a successful evolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolveOutcome {
    /// Source entry replaced by its evolved form at the end of the roster
    Evolved {
        /// Catalog record that evolved
        from: SpeciesRecord,
        /// Catalog record it became
        to: SpeciesRecord,
    },

    /// Evolved form was already present, so the new copy was released
    DuplicateReleased {
        /// Catalog record that evolved
        from: SpeciesRecord,
        /// Catalog record it became (already in the roster)
        to: SpeciesRecord,
    },
}

impl EvolveOutcome {
    /// The species that evolved
    pub fn evolved_from(&self) -> &SpeciesRecord {
        match self {
            EvolveOutcome::Evolved { from, .. } | EvolveOutcome::DuplicateReleased { from, .. } => {
                from
            }
        }
    }

    /// The evolved form
    pub fn evolved_to(&self) -> &SpeciesRecord {
        match self {
            EvolveOutcome::Evolved { to, .. } | EvolveOutcome::DuplicateReleased { to, .. } => to,
        }
    }

    /// Whether the evolved copy was released as a duplicate
    pub fn released_duplicate(&self) -> bool {
        matches!(self, EvolveOutcome::DuplicateReleased { .. })
    }
}

impl fmt::Display for EvolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = (self.evolved_from(), self.evolved_to());
        write!(
            f,
            "Pokemon evolved from {} (ID {}) to {} (ID {}).",
            from.name, from.id, to.name, to.id
        )?;
        if self.released_duplicate() {
            write!(f, " {} was already present; releasing it immediately.", to.name)?;
        }
        Ok(())
    }
}

/// Evolve the entry named `name` inside `roster`
///
/// `owner` only labels the `NotInRoster` error.
pub fn evolve(
    roster: &mut Roster,
    catalog: &Catalog,
    owner: &str,
    name: &str,
) -> Result<EvolveOutcome, RosterError> {
    let from = catalog.lookup_by_name(name)?;
    let successor = from
        .successor_id()
        .ok_or_else(|| RosterError::NotEvolvable(from.name.clone()))?;
    let to = catalog.lookup_by_id(successor)?;

    let position = roster
        .position_of(&from.name)
        .ok_or_else(|| RosterError::NotInRoster {
            owner: owner.to_string(),
            species: name.to_string(),
        })?;

    let duplicate = roster.contains_id(to.id);
    roster.remove_at(position);
    roster.push(to.clone());

    if duplicate {
        roster.pop();
        return Ok(EvolveOutcome::DuplicateReleased {
            from: from.clone(),
            to: to.clone(),
        });
    }

    Ok(EvolveOutcome::Evolved {
        from: from.clone(),
        to: to.clone(),
    })
}
