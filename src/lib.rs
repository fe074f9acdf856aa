//! # Species Roster Manager
//!
//! In-memory bookkeeping for a fixed species catalog and a dynamic set of
//! owners, each holding an ordered roster of species copies.
//!
//! ## Core Structure
//!
//! 1. **Catalog**: immutable, id-indexed species records (O(1) by id)
//! 2. **Roster**: per-owner ordered list of record copies
//! 3. **Owner tree**: unbalanced BST keyed by case-folded owner name
//! 4. **Evolution**: successor rule `id + 1`, swap-and-merge-duplicate policy
//!
//! The core never performs I/O. The [`shell`] module and the `pokeroster`
//! binary sit on top of it.
//!
//! ## Usage Example
//!
//! ```
//! use pokeroster::{Catalog, Registry, RegistryConfig, SpeciesRecord, TraversalOrder};
//!
//! let catalog = Catalog::new(vec![
//!     SpeciesRecord::new(1, "Treecko", "GRASS", 40, 45, true),
//!     SpeciesRecord::new(2, "Grovyle", "GRASS", 50, 65, true),
//! ]).unwrap();
//! let config = RegistryConfig::default().with_starters(vec![1]);
//! let mut registry = Registry::new(catalog, config).unwrap();
//!
//! registry.create_owner("Ash", 1).unwrap();
//! registry.evolve_species("ash", "treecko").unwrap();
//!
//! let owners = registry.owners(TraversalOrder::InOrder);
//! assert_eq!(owners[0].roster().names(), vec!["Grovyle"]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod catalog;    // Species records and catalog ingestion
pub mod roster;     // Per-owner rosters, filters, evolution rule
pub mod tree;       // Owner binary search tree
pub mod registry;   // Explicit handle binding catalog, tree and config
pub mod shell;      // Line-oriented command front end
pub mod util;       // Name folding helpers

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, SpeciesRecord};
pub use roster::{EvolveOutcome, Roster, RosterFilter};
pub use tree::{OwnerEntry, OwnerNode, OwnerSummary, OwnerTree, TraversalOrder};
pub use registry::{Registry, RegistryConfig};

use thiserror::Error;

/// Outcomes of roster and tree operations that did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// An owner with the same case-insensitive name already exists
    #[error("Owner '{0}' already exists")]
    DuplicateOwner(String),

    /// No owner with this name
    #[error("Owner '{0}' not found")]
    OwnerNotFound(String),

    /// The owner's roster holds no species with this name
    #[error("No species named '{species}' in {owner}'s roster")]
    NotInRoster {
        /// Owner whose roster was searched
        owner: String,
        /// Species name that was looked for
        species: String,
    },

    /// Catalog lookup by id outside `[1, size]`
    #[error("ID {0} not found in catalog")]
    SpeciesIdNotFound(u32),

    /// Catalog lookup by name without a match
    #[error("Species '{0}' not found in catalog")]
    SpeciesNotFound(String),

    /// Evolution attempted on a species flagged non-evolvable
    #[error("{0} cannot evolve")]
    NotEvolvable(String),

    /// Species id already present in the roster
    #[error("{name} (ID {id}) is already in the roster")]
    AlreadyInRoster {
        /// Species id
        id: u32,
        /// Species display name
        name: String,
    },

    /// Owner names must contain at least one visible character
    #[error("Owner name must not be empty")]
    EmptyOwnerName,

    /// Starter choice outside the configured starter list
    #[error("Invalid starter choice {choice} (expected 1..={available})")]
    InvalidStarter {
        /// 1-based choice that was given
        choice: usize,
        /// Number of configured starters
        available: usize,
    },
}

impl RosterError {
    /// Whether the error reports a missing owner, roster entry or species
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RosterError::OwnerNotFound(_)
                | RosterError::NotInRoster { .. }
                | RosterError::SpeciesIdNotFound(_)
                | RosterError::SpeciesNotFound(_)
        )
    }
}
