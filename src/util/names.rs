//! Case folding for owner and species names
//!
//! Every comparison in the crate goes through these helpers so that
//! tree ordering, roster lookups and catalog scans agree on what
//! "same name" means.

/// Lowercase fold used as the comparison key
#[inline]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive exact match
pub fn names_match(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    fold_name(a) == fold_name(b)
}

/// Case-insensitive prefix test
pub fn starts_with_folded(name: &str, prefix: &str) -> bool {
    fold_name(name).starts_with(&fold_name(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_and_match() {
        assert_eq!(fold_name("Ash"), "ash");
        assert!(names_match("TREECKO", "treecko"));
        assert!(names_match("Flabébé", "FLABÉBÉ"));
        assert!(!names_match("Treecko", "Treeck"));
    }

    #[test]
    fn test_prefix() {
        assert!(starts_with_folded("Mudkip", "mu"));
        assert!(starts_with_folded("Mudkip", ""));
        assert!(!starts_with_folded("Mudkip", "mx"));
    }
}
