//! Utility functions

mod names;

pub use names::{fold_name, names_match, starts_with_folded};
