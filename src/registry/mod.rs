//! Registry: the explicit handle that replaces a process-wide root
//!
//! Binds the immutable catalog, the owner tree and configuration, and
//! exposes every user-level operation as a `Result`-returning method.
//! Writes take `&mut self`; the caller owns the one registry per session.

mod config;

pub use config::{RegistryConfig, DEFAULT_STARTERS};

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, SpeciesRecord};
use crate::roster::{evolve, EvolveOutcome, RosterFilter};
use crate::tree::{OwnerEntry, OwnerNode, OwnerSummary, OwnerTree, TraversalOrder};
use crate::RosterError;

/// Catalog + owner tree + configuration
#[derive(Debug)]
pub struct Registry {
    catalog: Catalog,
    owners: OwnerTree,
    config: RegistryConfig,
}

impl Registry {
    /// Create a registry, checking every configured starter exists
    pub fn new(catalog: Catalog, config: RegistryConfig) -> Result<Self, RosterError> {
        for &id in &config.starters {
            catalog.lookup_by_id(id)?;
        }
        Ok(Self {
            catalog,
            owners: OwnerTree::new(),
            config,
        })
    }

    /// The species catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of registered owners
    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    /// Starter records in menu order
    pub fn starters(&self) -> Vec<&SpeciesRecord> {
        self.config
            .starters
            .iter()
            .filter_map(|&id| self.catalog.lookup_by_id(id).ok())
            .collect()
    }

    /// Register an owner with the starter at 1-based `choice`
    pub fn create_owner(&mut self, name: &str, choice: usize) -> Result<&OwnerNode, RosterError> {
        if self.owners.contains(name) {
            warn!(owner = name, "duplicate owner rejected");
            return Err(RosterError::DuplicateOwner(name.trim().to_string()));
        }

        let starter_id = self
            .config
            .starter_id(choice)
            .ok_or(RosterError::InvalidStarter {
                choice,
                available: self.config.starters.len(),
            })?;
        let starter = self.catalog.lookup_by_id(starter_id)?.clone();

        let node: &OwnerNode = self.owners.insert(name, starter)?;
        info!(owner = node.name(), starter = starter_id, "owner created");
        Ok(node)
    }

    /// Case-insensitive owner lookup
    pub fn owner(&self, name: &str) -> Result<&OwnerNode, RosterError> {
        self.owners
            .find(name)
            .ok_or_else(|| RosterError::OwnerNotFound(name.to_string()))
    }

    fn owner_mut(&mut self, name: &str) -> Result<&mut OwnerNode, RosterError> {
        self.owners
            .find_mut(name)
            .ok_or_else(|| RosterError::OwnerNotFound(name.to_string()))
    }

    /// Add a copy of catalog species `id` to an owner's roster
    ///
    /// Returns the owner (for its display name) and the catalog record.
    pub fn add_species(
        &mut self,
        owner: &str,
        id: u32,
    ) -> Result<(&OwnerNode, &SpeciesRecord), RosterError> {
        let record = self.catalog.lookup_by_id(id)?;
        let node = self
            .owners
            .find_mut(owner)
            .ok_or_else(|| RosterError::OwnerNotFound(owner.to_string()))?;
        node.roster_mut().add(record)?;
        debug!(owner = node.name(), species = id, "species added");
        Ok((&*node, record))
    }

    /// Release the first roster entry named `species`
    pub fn release_species(
        &mut self,
        owner: &str,
        species: &str,
    ) -> Result<(&OwnerNode, SpeciesRecord), RosterError> {
        let node = self.owner_mut(owner)?;
        let released = node
            .roster_mut()
            .release(species)
            .ok_or_else(|| RosterError::NotInRoster {
                owner: node.name().to_string(),
                species: species.to_string(),
            })?;
        debug!(owner = node.name(), species = %released.name, "species released");
        Ok((&*node, released))
    }

    /// Evolve the roster entry named `species`
    pub fn evolve_species(
        &mut self,
        owner: &str,
        species: &str,
    ) -> Result<EvolveOutcome, RosterError> {
        let node = self
            .owners
            .find_mut(owner)
            .ok_or_else(|| RosterError::OwnerNotFound(owner.to_string()))?;
        let owner_label = node.name().to_string();
        let outcome = evolve(node.roster_mut(), &self.catalog, &owner_label, species)?;
        debug!(
            owner = %owner_label,
            from = outcome.evolved_from().id,
            to = outcome.evolved_to().id,
            duplicate = outcome.released_duplicate(),
            "species evolved"
        );
        Ok(outcome)
    }

    /// Remove an owner and everything they hold
    pub fn delete_owner(&mut self, name: &str) -> Result<OwnerEntry, RosterError> {
        let removed = self
            .owners
            .delete(name)
            .ok_or_else(|| RosterError::OwnerNotFound(name.to_string()))?;
        info!(owner = %removed.name, remaining = self.owners.len(), "owner deleted");
        Ok(removed)
    }

    /// Owners in the given traversal order
    pub fn owners(&self, order: TraversalOrder) -> Vec<&OwnerNode> {
        self.owners.walk(order)
    }

    /// Owners by roster size, then name
    pub fn ranking(&self) -> Vec<OwnerSummary> {
        self.owners.ranked_by_roster_size()
    }

    /// An owner's roster entries passing `filter`
    pub fn filter_roster(
        &self,
        owner: &str,
        filter: &RosterFilter,
    ) -> Result<Vec<&SpeciesRecord>, RosterError> {
        let node = self.owner(owner)?;
        Ok(node.roster().filter(filter).collect())
    }
}
