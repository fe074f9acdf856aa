mod common;

use common::data_path;
use pokeroster::catalog::{load_catalog, parse_catalog};
use pokeroster::CatalogError;
use test_case::test_case;

const HEADER: &str = "ID,Name,Type,HP,Attack,Can Evolve\n";

#[test]
fn test_bundled_catalog() {
    let catalog = load_catalog(data_path("hoenn_pokedex.csv")).expect("bundled catalog loads");
    assert_eq!(catalog.len(), 18);
    assert_eq!(catalog.lookup_by_id(7).unwrap().name, "Mudkip");
    assert_eq!(catalog.lookup_by_name("swampert").unwrap().id, 9);
    assert!(!catalog.lookup_by_id(18).unwrap().can_evolve);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_catalog(data_path("no_such_catalog.csv"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test_case("1,Treecko,GRASS,40,45\n", "line 2: expected 6 fields, found 5" ; "too few fields")]
#[test_case("1,Treecko,GRASS,40,45,TRUE,extra\n", "line 2: expected 6 fields, found 7" ; "too many fields")]
#[test_case("one,Treecko,GRASS,40,45,TRUE\n", "line 2: invalid id 'one'" ; "bad id")]
#[test_case("1,Treecko,GRASS,40,4.5,TRUE\n", "line 2: invalid attack '4.5'" ; "bad attack")]
#[test_case("1,Treecko,GRASS,40,45,YES\n", "line 2: invalid evolve flag 'YES' (expected TRUE or FALSE)" ; "bad flag")]
#[test_case("2,Grovyle,GRASS,50,65,TRUE\n", "expected species id 1, found 2" ; "ids start at one")]
#[test_case("", "catalog contains no species" ; "header only")]
#[test_case("\n1,Treecko,GRASS,40,45,TRUE\n", "catalog contains no species" ; "blank row terminates")]
fn test_malformed_catalog(body: &str, message: &str) {
    let text = format!("{}{}", HEADER, body);
    let err = parse_catalog(text.as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_flags_and_whitespace_are_lenient() {
    let text = format!("{}1, Treecko ,GRASS, 40 ,45,True\n2,Grovyle,GRASS,50,65,false\n", HEADER);
    let catalog = parse_catalog(text.as_bytes()).unwrap();
    let treecko = catalog.lookup_by_id(1).unwrap();
    assert_eq!(treecko.name, "Treecko");
    assert_eq!(treecko.hp, 40);
    assert!(treecko.can_evolve);
    assert!(!catalog.lookup_by_id(2).unwrap().can_evolve);
}
