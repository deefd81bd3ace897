// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-sifts: UniProt / PDB residue numbering translation
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! # Example
//!
//! ```
//! use ferro_sifts::{translate, Direction, MappingSet, Segment, StructAnchor};
//!
//! let mappings = MappingSet::new(vec![Segment::new(
//!     1,
//!     "A",
//!     "A",
//!     10,
//!     20,
//!     StructAnchor::new(5, 5, ""),
//!     StructAnchor::new(15, 15, ""),
//! )]);
//!
//! let positions = translate(12, 14, Direction::UnpToStruct, &mappings).unwrap();
//! assert_eq!(positions.len(), 1);
//! assert_eq!((positions[0].start, positions[0].end), (7, 9));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod coords;
pub mod error;
pub mod mapping;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sifts;
pub mod translate;

// Re-export commonly used types
pub use coords::ResidueRange;
pub use error::{ErrorCode, FerroError, PositionMappingError};
pub use mapping::{MappingSet, Segment, StructAnchor};
pub use sifts::SiftsDocument;
pub use translate::{
    translate, translate_with_options, AuthorResidue, Direction, TranslateOptions,
    TranslatedPosition,
};

/// Result type alias for ferro-sifts operations
pub type Result<T> = std::result::Result<T, FerroError>;
