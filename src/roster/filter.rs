//! Display filters over species records

use std::fmt;
use std::str::FromStr;

use crate::catalog::SpeciesRecord;
use crate::util::{names_match, starts_with_folded};

/// Predicate used to narrow a roster or catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RosterFilter {
    /// Type tag equals (case-insensitive)
    Kind(String),
    /// Only species that can evolve
    Evolvable,
    /// Attack strictly above the threshold
    AttackAbove(i32),
    /// HP strictly above the threshold
    HpAbove(i32),
    /// Name starts with the prefix (case-insensitive)
    NamePrefix(String),
    /// Everything
    #[default]
    All,
}

impl RosterFilter {
    /// Test one record
    pub fn matches(&self, record: &SpeciesRecord) -> bool {
        match self {
            RosterFilter::Kind(kind) => names_match(&record.kind, kind),
            RosterFilter::Evolvable => record.can_evolve,
            RosterFilter::AttackAbove(threshold) => record.attack > *threshold,
            RosterFilter::HpAbove(threshold) => record.hp > *threshold,
            RosterFilter::NamePrefix(prefix) => starts_with_folded(&record.name, prefix),
            RosterFilter::All => true,
        }
    }

    /// Parse from shell words: `type GRASS`, `evolvable`, `attack 50`,
    /// `hp 40`, `prefix tr`, `all`
    pub fn from_words(words: &[&str]) -> Result<Self, String> {
        match words {
            [] | ["all"] => Ok(RosterFilter::All),
            ["evolvable"] => Ok(RosterFilter::Evolvable),
            ["type", kind] => Ok(RosterFilter::Kind(kind.to_string())),
            ["prefix", prefix] => Ok(RosterFilter::NamePrefix(prefix.to_string())),
            ["attack", value] => parse_threshold(value).map(RosterFilter::AttackAbove),
            ["hp", value] => parse_threshold(value).map(RosterFilter::HpAbove),
            _ => Err(format!("unknown filter '{}'", words.join(" "))),
        }
    }
}

fn parse_threshold(value: &str) -> Result<i32, String> {
    value
        .parse()
        .map_err(|_| format!("invalid threshold '{}'", value))
}

impl FromStr for RosterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        Self::from_words(&words)
    }
}

impl fmt::Display for RosterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterFilter::Kind(kind) => write!(f, "type {}", kind),
            RosterFilter::Evolvable => write!(f, "evolvable"),
            RosterFilter::AttackAbove(threshold) => write!(f, "attack > {}", threshold),
            RosterFilter::HpAbove(threshold) => write!(f, "hp > {}", threshold),
            RosterFilter::NamePrefix(prefix) => write!(f, "name starts with '{}'", prefix),
            RosterFilter::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn mudkip() -> SpeciesRecord {
        SpeciesRecord::new(7, "Mudkip", "WATER", 50, 70, true)
    }

    #[test_case(RosterFilter::Kind("water".into()), true ; "type match ignores case")]
    #[test_case(RosterFilter::Kind("FIRE".into()), false ; "type mismatch")]
    #[test_case(RosterFilter::Evolvable, true ; "evolvable")]
    #[test_case(RosterFilter::AttackAbove(70), false ; "attack threshold is strict")]
    #[test_case(RosterFilter::AttackAbove(69), true ; "attack above")]
    #[test_case(RosterFilter::HpAbove(49), true ; "hp above")]
    #[test_case(RosterFilter::NamePrefix("MUD".into()), true ; "prefix ignores case")]
    #[test_case(RosterFilter::NamePrefix("kip".into()), false ; "prefix is anchored")]
    #[test_case(RosterFilter::All, true ; "all")]
    fn test_matches(filter: RosterFilter, expected: bool) {
        assert_eq!(filter.matches(&mudkip()), expected);
    }

    #[test_case("", RosterFilter::All ; "empty means all")]
    #[test_case("type GRASS", RosterFilter::Kind("GRASS".into()) ; "type tag")]
    #[test_case("attack 50", RosterFilter::AttackAbove(50) ; "attack")]
    #[test_case("hp -1", RosterFilter::HpAbove(-1) ; "negative hp")]
    #[test_case("prefix tr", RosterFilter::NamePrefix("tr".into()) ; "prefix")]
    fn test_parse(text: &str, expected: RosterFilter) {
        assert_eq!(text.parse::<RosterFilter>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("attack lots".parse::<RosterFilter>().is_err());
        assert!("colour red".parse::<RosterFilter>().is_err());
    }
}
