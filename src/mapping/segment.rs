//! A single row of the alignment table.

use serde::Serialize;
use std::fmt;

use crate::coords::ResidueRange;

/// Structural position at one end of a segment.
///
/// `residue_number` is the sequential structural index used for arithmetic.
/// The author number and insertion code are what a structure file shows to
/// people; they are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StructAnchor {
    residue_number: i64,
    author_residue_number: i64,
    author_insertion_code: String,
}

impl StructAnchor {
    /// Create a new anchor.
    pub fn new(
        residue_number: i64,
        author_residue_number: i64,
        author_insertion_code: impl Into<String>,
    ) -> Self {
        Self {
            residue_number,
            author_residue_number,
            author_insertion_code: author_insertion_code.into(),
        }
    }

    /// Structural residue number.
    pub fn residue_number(&self) -> i64 {
        self.residue_number
    }

    /// Author residue number as deposited.
    pub fn author_residue_number(&self) -> i64 {
        self.author_residue_number
    }

    /// Author insertion code; empty when the residue has none.
    pub fn author_insertion_code(&self) -> &str {
        &self.author_insertion_code
    }

    /// Author label such as `52A` or `17`.
    pub fn author_label(&self) -> String {
        format!(
            "{}{}",
            self.author_residue_number,
            self.author_insertion_code.trim()
        )
    }
}

/// One contiguous aligned segment for one chain of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    entity_id: u32,
    chain_id: String,
    struct_asym_id: String,
    unp_start: i64,
    unp_end: i64,
    start: StructAnchor,
    end: StructAnchor,
}

impl Segment {
    /// Create a new segment.
    ///
    /// Bounds are stored as given; see [`crate::MappingSet::validate`] for
    /// consistency checks.
    pub fn new(
        entity_id: u32,
        chain_id: impl Into<String>,
        struct_asym_id: impl Into<String>,
        unp_start: i64,
        unp_end: i64,
        start: StructAnchor,
        end: StructAnchor,
    ) -> Self {
        Self {
            entity_id,
            chain_id: chain_id.into(),
            struct_asym_id: struct_asym_id.into(),
            unp_start,
            unp_end,
            start,
            end,
        }
    }

    /// Entity identifier.
    pub fn entity_id(&self) -> u32 {
        self.entity_id
    }

    /// Author chain identifier.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Label (mmCIF `struct_asym`) chain identifier.
    pub fn struct_asym_id(&self) -> &str {
        &self.struct_asym_id
    }

    /// First UniProt position (inclusive).
    pub fn unp_start(&self) -> i64 {
        self.unp_start
    }

    /// Last UniProt position (inclusive).
    pub fn unp_end(&self) -> i64 {
        self.unp_end
    }

    /// Structural anchor at `unp_start`.
    pub fn start(&self) -> &StructAnchor {
        &self.start
    }

    /// Structural anchor at `unp_end`.
    pub fn end(&self) -> &StructAnchor {
        &self.end
    }

    /// UniProt bounds, or None if inverted.
    pub fn unp_range(&self) -> Option<ResidueRange> {
        ResidueRange::from_bounds(self.unp_start, self.unp_end)
    }

    /// Structural bounds, or None if inverted.
    pub fn struct_range(&self) -> Option<ResidueRange> {
        ResidueRange::from_bounds(self.start.residue_number, self.end.residue_number)
    }

    /// True if this segment belongs to the given entity and author chain.
    pub fn is_chain(&self, entity_id: u32, chain_id: &str) -> bool {
        self.entity_id == entity_id && self.chain_id == chain_id
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entity {} chain {} ({}): UNP {}-{} -> {}-{} (author {}-{})",
            self.entity_id,
            self.chain_id,
            self.struct_asym_id,
            self.unp_start,
            self.unp_end,
            self.start.residue_number,
            self.end.residue_number,
            self.start.author_label(),
            self.end.author_label()
        )
    }
}
