//! SIFTS alignment document loader.
//!
//! Decodes the JSON layout served by the PDBe `mappings/uniprot` endpoint
//! (and its bulk dumps) into [`MappingSet`]s. Retrieval is left to the
//! caller; this module reads from strings, readers and local files, with
//! transparent gzip support for `.gz` paths.
//!
//! # Document Layout
//!
//! ```json
//! {
//!   "1cbs": {
//!     "UniProt": {
//!       "P29373": {
//!         "identifier": "RABP2_HUMAN",
//!         "name": "RABP2_HUMAN",
//!         "mappings": [
//!           {
//!             "entity_id": 1, "chain_id": "A", "struct_asym_id": "A",
//!             "unp_start": 1, "unp_end": 137,
//!             "start": { "residue_number": 1, "author_residue_number": 1, "author_insertion_code": "" },
//!             "end": { "residue_number": 137, "author_residue_number": 137, "author_insertion_code": "" }
//!           }
//!         ]
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Real documents sometimes carry `null` author numbers or insertion codes;
//! a missing author number falls back to the structural residue number and a
//! missing insertion code becomes the empty string.
//!
//! # Example
//!
//! ```
//! use ferro_sifts::{translate, Direction, SiftsDocument};
//!
//! let json = r#"{"1abc": {"UniProt": {"P12345": {"mappings": [{
//!     "entity_id": 1, "chain_id": "A", "struct_asym_id": "A",
//!     "unp_start": 10, "unp_end": 20,
//!     "start": {"residue_number": 5, "author_residue_number": 5, "author_insertion_code": ""},
//!     "end": {"residue_number": 15, "author_residue_number": 15, "author_insertion_code": ""}
//! }]}}}}"#;
//!
//! let doc = SiftsDocument::parse(json).unwrap();
//! let mappings = doc.mapping_set("1abc", "P12345").unwrap();
//! let hits = translate(12, 14, Direction::UnpToStruct, &mappings).unwrap();
//! assert_eq!((hits[0].start, hits[0].end), (7, 9));
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::error::FerroError;
use crate::mapping::{MappingSet, Segment, StructAnchor};

/// A decoded SIFTS document, keyed by PDB entry id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SiftsDocument {
    entries: BTreeMap<String, SiftsEntry>,
}

/// Mappings for one PDB entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiftsEntry {
    /// UniProt mappings keyed by accession
    #[serde(rename = "UniProt", default)]
    pub uniprot: BTreeMap<String, UniProtMapping>,
}

/// All segments aligning one UniProt accession to one entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UniProtMapping {
    /// UniProt entry name, e.g. `RABP2_HUMAN`
    #[serde(default)]
    pub identifier: String,
    /// Protein name
    #[serde(default)]
    pub name: String,
    /// Alignment rows in document order
    #[serde(default)]
    pub mappings: Vec<SiftsRow>,
}

/// One alignment row as it appears in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct SiftsRow {
    pub entity_id: u32,
    pub chain_id: String,
    pub struct_asym_id: String,
    pub unp_start: i64,
    pub unp_end: i64,
    pub start: SiftsResidue,
    pub end: SiftsResidue,
}

/// Residue reference inside a row.
#[derive(Debug, Clone, Deserialize)]
pub struct SiftsResidue {
    pub residue_number: i64,
    #[serde(default)]
    pub author_residue_number: Option<i64>,
    #[serde(default)]
    pub author_insertion_code: Option<String>,
}

impl SiftsResidue {
    fn to_anchor(&self) -> StructAnchor {
        StructAnchor::new(
            self.residue_number,
            self.author_residue_number.unwrap_or(self.residue_number),
            self.author_insertion_code.clone().unwrap_or_default(),
        )
    }
}

impl SiftsRow {
    /// Convert to a [`Segment`].
    pub fn to_segment(&self) -> Segment {
        Segment::new(
            self.entity_id,
            self.chain_id.as_str(),
            self.struct_asym_id.as_str(),
            self.unp_start,
            self.unp_end,
            self.start.to_anchor(),
            self.end.to_anchor(),
        )
    }
}

impl SiftsDocument {
    /// Parse a document from a JSON string.
    pub fn parse(json: &str) -> Result<Self, FerroError> {
        let doc: SiftsDocument = serde_json::from_str(json)?;
        debug!("Parsed SIFTS document with {} entries", doc.entries.len());
        Ok(doc)
    }

    /// Parse a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FerroError> {
        let doc: SiftsDocument = serde_json::from_reader(BufReader::new(reader))?;
        debug!("Read SIFTS document with {} entries", doc.entries.len());
        Ok(doc)
    }

    /// Load a document from a path (supports .json and .json.gz).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FerroError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FerroError::Io {
            msg: format!("Failed to open SIFTS file {}: {}", path.display(), e),
        })?;

        if path.to_string_lossy().ends_with(".gz") {
            Self::from_reader(flate2::read::GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
    }

    /// PDB entry ids present in the document.
    pub fn entry_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry; PDB ids compare case-insensitively.
    pub fn entry(&self, pdb_id: &str) -> Option<&SiftsEntry> {
        self.entries.get(pdb_id).or_else(|| {
            self.entries
                .iter()
                .find(|(id, _)| id.eq_ignore_ascii_case(pdb_id))
                .map(|(_, entry)| entry)
        })
    }

    /// The only entry id, if the document holds exactly one.
    pub fn single_entry_id(&self) -> Option<&str> {
        if self.entries.len() == 1 {
            self.entry_ids().next()
        } else {
            None
        }
    }

    /// Accessions mapped to an entry, in sorted order.
    pub fn accessions(&self, pdb_id: &str) -> Vec<&str> {
        self.entry(pdb_id)
            .map(|e| e.uniprot.keys().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Build the mapping set for one entry and one accession.
    ///
    /// Segment order follows the document.
    pub fn mapping_set(&self, pdb_id: &str, accession: &str) -> Result<MappingSet, FerroError> {
        let entry = self.require_entry(pdb_id)?;
        let mapping = entry
            .uniprot
            .get(accession)
            .ok_or_else(|| FerroError::EntryNotFound {
                id: format!("{}/{}", pdb_id, accession),
            })?;

        let set: MappingSet = mapping.mappings.iter().map(SiftsRow::to_segment).collect();
        debug!(
            "Built mapping set for {}/{} with {} segments",
            pdb_id,
            accession,
            set.len()
        );
        Ok(set.with_label(format!("{}/{}", pdb_id, accession)))
    }

    /// Build one mapping set covering every accession of an entry.
    ///
    /// Accessions are concatenated in sorted order; segment order within an
    /// accession follows the document.
    pub fn entry_mapping_set(&self, pdb_id: &str) -> Result<MappingSet, FerroError> {
        let entry = self.require_entry(pdb_id)?;
        let set: MappingSet = entry
            .uniprot
            .values()
            .flat_map(|m| m.mappings.iter().map(SiftsRow::to_segment))
            .collect();
        Ok(set.with_label(pdb_id.to_string()))
    }

    fn require_entry(&self, pdb_id: &str) -> Result<&SiftsEntry, FerroError> {
        self.entry(pdb_id).ok_or_else(|| FerroError::EntryNotFound {
            id: pdb_id.to_string(),
        })
    }
}
