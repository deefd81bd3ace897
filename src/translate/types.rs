//! Request and result types for translation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which numbering system is the input of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// UniProt positions in, structural positions out
    UnpToStruct,
    /// Structural positions in, UniProt positions out
    StructToUnp,
}

impl Direction {
    /// The opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            Direction::UnpToStruct => Direction::StructToUnp,
            Direction::StructToUnp => Direction::UnpToStruct,
        }
    }

    /// Short name of the input numbering system.
    pub fn source_label(self) -> &'static str {
        match self {
            Direction::UnpToStruct => "UNP",
            Direction::StructToUnp => "STRUCT",
        }
    }

    /// Short name of the output numbering system.
    pub fn target_label(self) -> &'static str {
        self.inverse().source_label()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::UnpToStruct => write!(f, "unp-to-struct"),
            Direction::StructToUnp => write!(f, "struct-to-unp"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Parse a direction.
    ///
    /// Accepts the canonical names as well as `pdb` spellings and the bare
    /// source system name.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_sifts::Direction;
    ///
    /// assert_eq!("unp-to-struct".parse::<Direction>().unwrap(), Direction::UnpToStruct);
    /// assert_eq!("PDB_TO_UNP".parse::<Direction>().unwrap(), Direction::StructToUnp);
    /// assert_eq!("unp".parse::<Direction>().unwrap(), Direction::UnpToStruct);
    /// assert!("sideways".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "unp-to-struct" | "unp-to-pdb" | "unp" | "uniprot" => Ok(Direction::UnpToStruct),
            "struct-to-unp" | "pdb-to-unp" | "struct" | "pdb" => Ok(Direction::StructToUnp),
            _ => Err(format!(
                "Unknown direction '{}': expected unp-to-struct or struct-to-unp",
                s
            )),
        }
    }
}

/// Author-facing residue label carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AuthorResidue {
    /// Author residue number
    pub number: i64,
    /// Insertion code; empty when none
    pub insertion_code: String,
}

impl fmt::Display for AuthorResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.insertion_code.trim())
    }
}

/// One translated location in the target numbering system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TranslatedPosition {
    /// First target position (inclusive)
    pub start: i64,
    /// Last target position (inclusive)
    pub end: i64,
    /// Entity the segment belongs to
    pub entity: u32,
    /// Chain identifier (label chain toward structure, author chain toward UniProt)
    pub chain: String,
    /// Author label at `start`, when it sits on a segment anchor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_author: Option<AuthorResidue>,
    /// Author label at `end`, when it sits on a segment anchor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_author: Option<AuthorResidue>,
}

impl TranslatedPosition {
    /// Create a position without author metadata.
    pub fn new(start: i64, end: i64, entity: u32, chain: impl Into<String>) -> Self {
        Self {
            start,
            end,
            entity,
            chain: chain.into(),
            start_author: None,
            end_author: None,
        }
    }

    /// Number of positions covered.
    pub fn len(&self) -> i64 {
        self.end - self.start + 1
    }

    /// Always false; a translated position covers at least one residue
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for TranslatedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entity {} chain {}: {}-{}",
            self.entity, self.chain, self.start, self.end
        )
    }
}

/// Caller choices for a translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Return an empty result instead of an error when nothing overlaps.
    ///
    /// Malformed requests and empty mapping sets still fail.
    pub allow_empty: bool,
}

impl TranslateOptions {
    /// Options that accept an empty result.
    pub fn allowing_empty() -> Self {
        Self { allow_empty: true }
    }
}
