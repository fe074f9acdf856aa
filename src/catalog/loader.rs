//! Catalog ingestion from comma-separated text
//!
//! Layout: one header row, then `id,name,type,hp,attack,can_evolve` rows.
//! Reading stops at end of input or at the first row whose id field is
//! blank. Any malformed row aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::{Catalog, SpeciesRecord};

const FIELDS_PER_ROW: usize = 6;

/// Errors raised while reading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying reader failed
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Row does not have exactly six fields
    #[error("line {line}: expected 6 fields, found {found}")]
    FieldCount {
        /// 1-based line number
        line: usize,
        /// Number of fields present
        found: usize,
    },

    /// Numeric field failed to parse
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Column name
        field: &'static str,
        /// Raw text
        value: String,
    },

    /// Evolve flag is neither TRUE nor FALSE
    #[error("line {line}: invalid evolve flag '{value}' (expected TRUE or FALSE)")]
    InvalidFlag {
        /// 1-based line number
        line: usize,
        /// Raw text
        value: String,
    },

    /// Ids must run 1, 2, 3, ... without gaps
    #[error("expected species id {expected}, found {found}")]
    NonContiguousId {
        /// Id required at this position
        expected: u32,
        /// Id actually read
        found: u32,
    },

    /// No data rows before the terminator
    #[error("catalog contains no species")]
    Empty,
}

/// Open and parse a catalog file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = parse_catalog(BufReader::new(file))?;
    debug!(path = %path.display(), species = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse catalog text from any buffered reader
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Catalog, CatalogError> {
    let mut records = Vec::new();

    // Header row is skipped unconditionally
    for (line_no, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields[0].is_empty() {
            break;
        }
        records.push(parse_row(&fields, line_no + 1)?);
    }

    Catalog::new(records)
}

fn parse_row(fields: &[&str], line: usize) -> Result<SpeciesRecord, CatalogError> {
    if fields.len() != FIELDS_PER_ROW {
        return Err(CatalogError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    Ok(SpeciesRecord {
        id: parse_number(fields[0], "id", line)?,
        name: fields[1].to_string(),
        kind: fields[2].to_string(),
        hp: parse_number(fields[3], "hp", line)?,
        attack: parse_number(fields[4], "attack", line)?,
        can_evolve: parse_flag(fields[5], line)?,
    })
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line: usize,
) -> Result<T, CatalogError> {
    value.parse().map_err(|_| CatalogError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_flag(value: &str, line: usize) -> Result<bool, CatalogError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CatalogError::InvalidFlag {
            line,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_terminator_row() {
        let text = "ID,Name,Type,HP,Attack,Can Evolve\n\
                    1,Treecko,GRASS,40,45,TRUE\n\
                    2, Grovyle ,GRASS,50,65,true\n\
                    ,,,,,\n\
                    this line is never read\n";
        let catalog = parse_catalog(text.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        let grovyle = catalog.lookup_by_id(2).unwrap();
        assert_eq!(grovyle.name, "Grovyle");
        assert!(grovyle.can_evolve);
    }

    #[test]
    fn test_bad_number_reports_line() {
        let text = "ID,Name,Type,HP,Attack,Can Evolve\n1,Treecko,GRASS,forty,45,TRUE\n";
        let err = parse_catalog(text.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid hp 'forty'");
    }

    #[test]
    fn test_header_only_is_empty() {
        let text = "ID,Name,Type,HP,Attack,Can Evolve\n";
        assert!(matches!(parse_catalog(text.as_bytes()), Err(CatalogError::Empty)));
    }
}
