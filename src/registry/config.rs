//! Registry configuration

/// Species ids offered as starters, in menu order (Treecko, Torchic, Mudkip)
pub const DEFAULT_STARTERS: [u32; 3] = [1, 4, 7];

/// Tunables for a [`Registry`](super::Registry)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    /// Catalog ids a new owner may start with; choice `n` picks `starters[n - 1]`
    pub starters: Vec<u32>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            starters: DEFAULT_STARTERS.to_vec(),
        }
    }
}

impl RegistryConfig {
    /// Replace the starter list
    pub fn with_starters(mut self, starters: Vec<u32>) -> Self {
        self.starters = starters;
        self
    }

    /// Catalog id for a 1-based starter choice
    pub fn starter_id(&self, choice: usize) -> Option<u32> {
        choice
            .checked_sub(1)
            .and_then(|index| self.starters.get(index))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starters() {
        let config = RegistryConfig::default();
        assert_eq!(config.starter_id(1), Some(1));
        assert_eq!(config.starter_id(3), Some(7));
        assert_eq!(config.starter_id(0), None);
        assert_eq!(config.starter_id(4), None);
    }
}
