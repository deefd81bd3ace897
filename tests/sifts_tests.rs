//! SIFTS document loading tests
//!
//! Exercises file loading (plain and gzipped) and the path from a decoded
//! document through translation.

use ferro_sifts::cache::TranslationCache;
use ferro_sifts::{translate, Direction, ErrorCode, FerroError, SiftsDocument};
use flate2::write::GzEncoder;
use flate2::Compression;
use rstest::rstest;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "2xyz": {
    "UniProt": {
      "P69905": {
        "identifier": "HBA_HUMAN",
        "name": "HBA_HUMAN",
        "mappings": [
          {
            "entity_id": 1, "chain_id": "A", "struct_asym_id": "A",
            "unp_start": 2, "unp_end": 142, "pdb_start": 1, "pdb_end": 141,
            "start": {"residue_number": 1, "author_residue_number": 1, "author_insertion_code": ""},
            "end": {"residue_number": 141, "author_residue_number": 141, "author_insertion_code": ""}
          },
          {
            "entity_id": 1, "chain_id": "C", "struct_asym_id": "C",
            "unp_start": 2, "unp_end": 142,
            "start": {"residue_number": 1, "author_residue_number": 1, "author_insertion_code": null},
            "end": {"residue_number": 141, "author_residue_number": null, "author_insertion_code": null}
          }
        ]
      },
      "P68871": {
        "identifier": "HBB_HUMAN",
        "name": "HBB_HUMAN",
        "mappings": [
          {
            "entity_id": 2, "chain_id": "B", "struct_asym_id": "B",
            "unp_start": 2, "unp_end": 147,
            "start": {"residue_number": 1, "author_residue_number": 1, "author_insertion_code": ""},
            "end": {"residue_number": 146, "author_residue_number": 146, "author_insertion_code": ""}
          }
        ]
      }
    }
  }
}"#;

fn write_plain(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, DOCUMENT).unwrap();
    path
}

fn write_gzipped(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(DOCUMENT.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_load_and_translate(#[case] gzipped: bool) {
    let dir = TempDir::new().unwrap();
    let path = if gzipped {
        write_gzipped(dir.path(), "2xyz.json.gz")
    } else {
        write_plain(dir.path(), "2xyz.json")
    };

    let doc = SiftsDocument::from_file(&path).unwrap();
    assert_eq!(doc.single_entry_id(), Some("2xyz"));

    let set = doc.mapping_set("2xyz", "P69905").unwrap();
    assert_eq!(set.len(), 2);

    let results = translate(12, 14, Direction::UnpToStruct, &set).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!((results[0].start, results[0].end), (11, 13));
    assert_eq!(results[0].chain, "A");
    assert_eq!(results[1].chain, "C");
}

#[test]
fn test_entry_mapping_set_concatenates_sorted_accessions() {
    let doc = SiftsDocument::parse(DOCUMENT).unwrap();
    assert_eq!(doc.accessions("2XYZ"), vec!["P68871", "P69905"]);

    let set = doc.entry_mapping_set("2xyz").unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.segments()[0].entity_id(), 2);
    assert_eq!(set.chains(), vec![(2, "B"), (1, "A"), (1, "C")]);
}

#[test]
fn test_null_author_number_at_anchor() {
    let doc = SiftsDocument::parse(DOCUMENT).unwrap();
    let set = doc.mapping_set("2xyz", "P69905").unwrap();

    let results = translate(140, 142, Direction::UnpToStruct, &set).unwrap();
    let chain_c = &results[1];
    let end_author = chain_c.end_author.as_ref().unwrap();
    assert_eq!(end_author.number, 141);
    assert_eq!(end_author.insertion_code, "");
}

#[test]
fn test_missing_entry_and_accession() {
    let doc = SiftsDocument::parse(DOCUMENT).unwrap();

    let err = doc.mapping_set("9zzz", "P69905").unwrap_err();
    assert_eq!(err.code(), ErrorCode::EntryNotFound);

    let err = doc.mapping_set("2xyz", "Q00000").unwrap_err();
    assert!(matches!(err, FerroError::EntryNotFound { ref id } if id == "2xyz/Q00000"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = SiftsDocument::from_file(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IoError);
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"2xyz\": {\"UniProt\": [}").unwrap();
    let err = SiftsDocument::from_file(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::JsonError);
}

#[test]
fn test_cache_over_loaded_set() {
    let doc = SiftsDocument::parse(DOCUMENT).unwrap();
    let hba = doc.mapping_set("2xyz", "P69905").unwrap();
    let hbb = doc.mapping_set("2xyz", "P68871").unwrap();
    let cache = TranslationCache::new(16);

    let a = cache.get_or_translate(12, 14, Direction::UnpToStruct, &hba).unwrap();
    let b = cache.get_or_translate(12, 14, Direction::UnpToStruct, &hbb).unwrap();
    assert_ne!(a, b);
    assert_eq!(cache.len(), 2);

    let again = cache.get_or_translate(12, 14, Direction::UnpToStruct, &hba).unwrap();
    assert_eq!(a, again);
    assert_eq!(cache.stats().hits, 1);
}
