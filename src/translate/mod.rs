//! Residue range translation between UniProt and structural numbering.
//!
//! # Overview
//!
//! Given a range in one numbering system and a [`MappingSet`], the
//! translator returns one [`TranslatedPosition`] for every segment that
//! overlaps the range, clipped to that segment and expressed in the other
//! numbering system.
//!
//! | Direction | Source bounds | Target bounds | `chain` in result |
//! |-----------|---------------|---------------|-------------------|
//! | [`Direction::UnpToStruct`] | `unp_start..unp_end` | `start.residue_number..end.residue_number` | `struct_asym_id` |
//! | [`Direction::StructToUnp`] | `start.residue_number..end.residue_number` | `unp_start..unp_end` | `chain_id` |
//!
//! All positions are 1-based and inclusive.
//!
//! # Example
//!
//! ```
//! use ferro_sifts::{translate, Direction, MappingSet, Segment, StructAnchor};
//!
//! // Two copies of the same chain
//! let mappings = MappingSet::new(vec![
//!     Segment::new(1, "A", "A", 1, 100, StructAnchor::new(1, 1, ""),
//!         StructAnchor::new(100, 100, "")),
//!     Segment::new(1, "B", "B", 1, 100, StructAnchor::new(1, 1, ""),
//!         StructAnchor::new(100, 100, "")),
//! ]);
//!
//! let hits = translate(40, 45, Direction::UnpToStruct, &mappings).unwrap();
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].chain, "A");
//! assert_eq!(hits[1].chain, "B");
//! ```
//!
//! [`MappingSet`]: crate::MappingSet

pub mod translator;
pub mod types;

pub use translator::{translate, translate_segment, translate_with_options};
pub use types::{AuthorResidue, Direction, TranslateOptions, TranslatedPosition};
