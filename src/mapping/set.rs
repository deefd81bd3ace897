//! Ordered, read-only collection of segments.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::segment::Segment;

/// The alignment table for one structure.
///
/// Segment order is significant: translation results follow it, and callers
/// use declaration order to express chain priority.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingSet {
    segments: Vec<Segment>,
    label: Option<String>,
    fingerprint: u64,
}

impl MappingSet {
    /// Create a mapping set from segments in declaration order.
    pub fn new(segments: Vec<Segment>) -> Self {
        let fingerprint = fingerprint(&segments);
        Self {
            segments,
            label: None,
            fingerprint,
        }
    }

    /// Create an empty mapping set.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Attach a human-readable label such as `1cbs/P29373`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Content hash of the segments.
    ///
    /// Identical segments in identical order give identical fingerprints.
    /// The label does not participate.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// All segments in declaration order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate segments in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments for one entity and author chain.
    pub fn for_chain<'a>(
        &'a self,
        entity_id: u32,
        chain_id: &'a str,
    ) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments
            .iter()
            .filter(move |s| s.is_chain(entity_id, chain_id))
    }

    /// Segments for one entity.
    pub fn for_entity(&self, entity_id: u32) -> impl Iterator<Item = &Segment> + '_ {
        self.segments
            .iter()
            .filter(move |s| s.entity_id() == entity_id)
    }

    /// Distinct `(entity_id, chain_id)` pairs in order of first appearance.
    pub fn chains(&self) -> Vec<(u32, &str)> {
        let mut seen: Vec<(u32, &str)> = Vec::new();
        for seg in &self.segments {
            let key = (seg.entity_id(), seg.chain_id());
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }

    /// Check the table's invariants.
    ///
    /// Returns every problem found; an empty vector means the table is
    /// consistent. Never fails: translation works on inconsistent tables too,
    /// it just may produce surprising results.
    pub fn validate(&self) -> Vec<MappingIssue> {
        let mut issues = Vec::new();
        let mut by_chain: HashMap<(u32, &str), Vec<usize>> = HashMap::new();

        for (index, seg) in self.segments.iter().enumerate() {
            if seg.unp_range().is_none() {
                issues.push(MappingIssue::InvertedUnpBounds { index });
                continue;
            }
            if seg.struct_range().is_none() {
                issues.push(MappingIssue::InvertedStructBounds { index });
                continue;
            }
            by_chain
                .entry((seg.entity_id(), seg.chain_id()))
                .or_default()
                .push(index);
        }

        let mut chains: Vec<_> = by_chain.into_iter().collect();
        chains.sort_by_key(|(_, indices)| indices[0]);

        for ((entity_id, chain_id), mut indices) in chains {
            indices.sort_by_key(|&i| (self.segments[i].unp_start(), i));

            for pair in indices.windows(2) {
                let (first, second) = (pair[0], pair[1]);
                let prev = &self.segments[first];
                let next = &self.segments[second];

                if next.unp_start() <= prev.unp_end() {
                    issues.push(MappingIssue::OverlappingUnp {
                        entity_id,
                        chain_id: chain_id.to_string(),
                        first,
                        second,
                    });
                }
                if next.start().residue_number() < prev.start().residue_number() {
                    issues.push(MappingIssue::NonMonotonic {
                        entity_id,
                        chain_id: chain_id.to_string(),
                        first,
                        second,
                    });
                }
            }
        }

        issues
    }
}

impl From<Vec<Segment>> for MappingSet {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl FromIterator<Segment> for MappingSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

fn fingerprint(segments: &[Segment]) -> u64 {
    let mut hasher = DefaultHasher::new();
    segments.hash(&mut hasher);
    hasher.finish()
}

/// An inconsistency found by [`MappingSet::validate`].
///
/// Indices refer to positions in [`MappingSet::segments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingIssue {
    /// `unp_start > unp_end`
    InvertedUnpBounds { index: usize },
    /// Structural start residue is after the end residue
    InvertedStructBounds { index: usize },
    /// Two segments of one chain cover the same UniProt position
    OverlappingUnp {
        entity_id: u32,
        chain_id: String,
        first: usize,
        second: usize,
    },
    /// Structural numbering decreases as UniProt numbering increases
    NonMonotonic {
        entity_id: u32,
        chain_id: String,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for MappingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingIssue::InvertedUnpBounds { index } => {
                write!(f, "segment {}: UniProt start is after UniProt end", index)
            }
            MappingIssue::InvertedStructBounds { index } => {
                write!(f, "segment {}: structural start is after structural end", index)
            }
            MappingIssue::OverlappingUnp {
                entity_id,
                chain_id,
                first,
                second,
            } => write!(
                f,
                "entity {} chain {}: segments {} and {} overlap in UniProt numbering",
                entity_id, chain_id, first, second
            ),
            MappingIssue::NonMonotonic {
                entity_id,
                chain_id,
                first,
                second,
            } => write!(
                f,
                "entity {} chain {}: structural numbering decreases from segment {} to {}",
                entity_id, chain_id, first, second
            ),
        }
    }
}
