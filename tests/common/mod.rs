#![allow(dead_code)]

use std::path::{Path, PathBuf};

use pokeroster::catalog::load_catalog;
use pokeroster::{Catalog, Registry, RegistryConfig, SpeciesRecord};

pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// The bundled 18-species catalog
pub fn hoenn_catalog() -> Catalog {
    load_catalog(data_path("hoenn_pokedex.csv")).expect("bundled catalog loads")
}

/// Registry over the bundled catalog with the default starters (1, 4, 7)
pub fn hoenn_registry() -> Registry {
    Registry::new(hoenn_catalog(), RegistryConfig::default()).expect("default starters exist")
}

/// Two-species catalog: Treecko (evolvable) -> Grovyle (not evolvable)
pub fn treecko_catalog() -> Catalog {
    Catalog::new(vec![
        SpeciesRecord::new(1, "Treecko", "GRASS", 40, 45, true),
        SpeciesRecord::new(2, "Grovyle", "GRASS", 50, 65, false),
    ])
    .expect("catalog is dense")
}

pub fn starter() -> SpeciesRecord {
    SpeciesRecord::new(1, "Treecko", "GRASS", 40, 45, true)
}

/// True when folded names are strictly ascending
pub fn strictly_ascending(names: &[&str]) -> bool {
    names
        .windows(2)
        .all(|pair| pair[0].to_lowercase() < pair[1].to_lowercase())
}
