//! Alignment segments between UniProt and structural numbering.
//!
//! A [`MappingSet`] is the ordered table of [`Segment`]s for one structure.
//! Each segment asserts that a contiguous UniProt range corresponds,
//! residue for residue, to a contiguous range of one chain of one entity.
//!
//! The set is a one-to-many table: a structure with several copies of the
//! same chain carries one segment per copy, so a single UniProt position can
//! land in more than one chain.
//!
//! Construction never validates. An empty or inconsistent table is a
//! legitimate input that simply translates to nothing;
//! [`MappingSet::validate`] reports inconsistencies on request.

pub mod segment;
pub mod set;

pub use segment::{Segment, StructAnchor};
pub use set::{MappingIssue, MappingSet};
