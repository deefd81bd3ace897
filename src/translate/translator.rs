//! The translation engine.

use tracing::{debug, trace};

use super::types::{AuthorResidue, Direction, TranslateOptions, TranslatedPosition};
use crate::coords::ResidueRange;
use crate::error::PositionMappingError;
use crate::mapping::{MappingSet, Segment, StructAnchor};

/// Translate a residue range through every overlapping segment.
///
/// `start` and `end` are 1-based and inclusive in the numbering system named
/// by the source side of `direction`. Results follow segment declaration
/// order. Fails if the range is malformed, the mapping set is empty, or no
/// segment overlaps the range.
///
/// # Examples
///
/// ```
/// use ferro_sifts::{translate, Direction, MappingSet, Segment, StructAnchor};
///
/// let mappings = MappingSet::new(vec![Segment::new(
///     1, "A", "A", 10, 20,
///     StructAnchor::new(5, 5, ""),
///     StructAnchor::new(15, 15, ""),
/// )]);
///
/// let hits = translate(12, 14, Direction::UnpToStruct, &mappings).unwrap();
/// assert_eq!((hits[0].start, hits[0].end, hits[0].entity), (7, 9, 1));
///
/// assert!(translate(30, 40, Direction::UnpToStruct, &mappings).is_err());
/// ```
pub fn translate(
    start: i64,
    end: i64,
    direction: Direction,
    mappings: &MappingSet,
) -> Result<Vec<TranslatedPosition>, PositionMappingError> {
    translate_with_options(start, end, direction, mappings, &TranslateOptions::default())
}

/// Translate a residue range with explicit caller options.
///
/// With [`TranslateOptions::allow_empty`] set, a well-formed request that
/// overlaps nothing yields `Ok(vec![])` instead of an error.
pub fn translate_with_options(
    start: i64,
    end: i64,
    direction: Direction,
    mappings: &MappingSet,
    options: &TranslateOptions,
) -> Result<Vec<TranslatedPosition>, PositionMappingError> {
    let request = ResidueRange::new(start, end)?;

    if mappings.is_empty() {
        return Err(PositionMappingError::EmptyMappingSet);
    }

    let positions: Vec<TranslatedPosition> = mappings
        .iter()
        .filter_map(|segment| translate_segment(segment, &request, direction))
        .collect();

    if positions.is_empty() && !options.allow_empty {
        return Err(PositionMappingError::NoOverlap {
            start,
            end,
            direction,
        });
    }

    Ok(positions)
}

/// Translate a range through a single segment.
///
/// Returns None if the segment does not overlap the range or its bounds are
/// inverted on either side.
pub fn translate_segment(
    segment: &Segment,
    request: &ResidueRange,
    direction: Direction,
) -> Option<TranslatedPosition> {
    let (source, target) = match direction {
        Direction::UnpToStruct => (segment.unp_range(), segment.struct_range()),
        Direction::StructToUnp => (segment.struct_range(), segment.unp_range()),
    };

    let (Some(source), Some(target)) = (source, target) else {
        debug!(
            "Skipping segment with inverted bounds: entity {} chain {}",
            segment.entity_id(),
            segment.chain_id()
        );
        return None;
    };

    let overlap = request.intersect(&source)?;

    let mapped = map_boundary(overlap.start(), &source, &target)
        .zip(map_boundary(overlap.end(), &source, &target));
    let Some((mut lo, mut hi)) = mapped else {
        debug!(
            "Skipping segment whose offsets overflow: entity {} chain {}",
            segment.entity_id(),
            segment.chain_id()
        );
        return None;
    };
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    trace!(
        "{} {} -> {} {}-{} via entity {} chain {}",
        direction.source_label(),
        overlap,
        direction.target_label(),
        lo,
        hi,
        segment.entity_id(),
        segment.chain_id()
    );

    Some(match direction {
        Direction::UnpToStruct => TranslatedPosition {
            start: lo,
            end: hi,
            entity: segment.entity_id(),
            chain: segment.struct_asym_id().to_string(),
            start_author: author_at(segment, lo),
            end_author: author_at(segment, hi),
        },
        Direction::StructToUnp => {
            TranslatedPosition::new(lo, hi, segment.entity_id(), segment.chain_id())
        }
    })
}

/// Map one source position onto the target range.
///
/// Offsets are measured from whichever source anchor is nearer, so a segment
/// whose two sides differ in length stays pinned at both ends. The result is
/// clamped to the target range. Returns None if the offset arithmetic
/// overflows, which only happens for segments with extreme bounds.
fn map_boundary(pos: i64, source: &ResidueRange, target: &ResidueRange) -> Option<i64> {
    let from_start = pos.checked_sub(source.start())?;
    let from_end = source.end().checked_sub(pos)?;

    let mapped = if from_start <= from_end {
        target.start().checked_add(from_start)?
    } else {
        target.end().checked_sub(from_end)?
    };

    Some(mapped.clamp(target.start(), target.end()))
}

/// Author label for a structural residue that sits on one of the segment anchors.
fn author_at(segment: &Segment, residue_number: i64) -> Option<AuthorResidue> {
    [segment.start(), segment.end()]
        .into_iter()
        .find(|anchor| anchor.residue_number() == residue_number)
        .map(author_residue)
}

fn author_residue(anchor: &StructAnchor) -> AuthorResidue {
    AuthorResidue {
        number: anchor.author_residue_number(),
        insertion_code: anchor.author_insertion_code().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(entity: u32, chain: &str, unp: (i64, i64), res: (i64, i64)) -> Segment {
        Segment::new(
            entity,
            chain,
            chain,
            unp.0,
            unp.1,
            StructAnchor::new(res.0, res.0, ""),
            StructAnchor::new(res.1, res.1, ""),
        )
    }

    fn single_segment() -> MappingSet {
        MappingSet::new(vec![seg(1, "A", (10, 20), (5, 15))])
    }

    #[test]
    fn test_example_unp_to_struct() {
        let hits = translate(12, 14, Direction::UnpToStruct, &single_segment()).unwrap();
        assert_eq!(hits, vec![TranslatedPosition::new(7, 9, 1, "A")]);
    }

    #[test]
    fn test_struct_to_unp() {
        let hits = translate(7, 9, Direction::StructToUnp, &single_segment()).unwrap();
        assert_eq!(hits, vec![TranslatedPosition::new(12, 14, 1, "A")]);
    }

    #[test]
    fn test_request_clipped_to_segment() {
        let hits = translate(1, 100, Direction::UnpToStruct, &single_segment()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].start, hits[0].end), (5, 15));
    }

    #[test]
    fn test_partial_overlap_at_segment_start() {
        let hits = translate(8, 11, Direction::UnpToStruct, &single_segment()).unwrap();
        assert_eq!((hits[0].start, hits[0].end), (5, 6));
    }

    #[test]
    fn test_single_residue_on_boundary() {
        let set = single_segment();
        let hits = translate(20, 20, Direction::UnpToStruct, &set).unwrap();
        assert_eq!((hits[0].start, hits[0].end), (15, 15));
        let hits = translate(10, 10, Direction::UnpToStruct, &set).unwrap();
        assert_eq!((hits[0].start, hits[0].end), (5, 5));
    }

    #[test]
    fn test_no_overlap_errors() {
        let err = translate(21, 30, Direction::UnpToStruct, &single_segment()).unwrap_err();
        assert_eq!(
            err,
            PositionMappingError::NoOverlap {
                start: 21,
                end: 30,
                direction: Direction::UnpToStruct,
            }
        );
    }

    #[test]
    fn test_no_overlap_allowed_empty() {
        let hits = translate_with_options(
            21,
            30,
            Direction::UnpToStruct,
            &single_segment(),
            &TranslateOptions::allowing_empty(),
        )
        .unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_set_errors_even_when_empty_allowed() {
        let err = translate_with_options(
            1,
            5,
            Direction::UnpToStruct,
            &MappingSet::empty(),
            &TranslateOptions::allowing_empty(),
        )
        .unwrap_err();
        assert_eq!(err, PositionMappingError::EmptyMappingSet);
    }

    #[test]
    fn test_inverted_request_checked_before_content() {
        let err = translate(9, 3, Direction::UnpToStruct, &MappingSet::empty()).unwrap_err();
        assert!(matches!(err, PositionMappingError::InvalidRange { .. }));
    }

    #[test]
    fn test_non_positive_request() {
        let err = translate(0, 3, Direction::UnpToStruct, &single_segment()).unwrap_err();
        assert!(matches!(err, PositionMappingError::InvalidRange { .. }));
    }

    #[test]
    fn test_gap_between_segments_fans_out() {
        // UNP 1-10 -> 1-10, UNP 11-20 -> 21-30 (ten missing residues in the model)
        let set = MappingSet::new(vec![
            seg(1, "A", (1, 10), (1, 10)),
            seg(1, "A", (11, 20), (21, 30)),
        ]);
        let hits = translate(8, 13, Direction::UnpToStruct, &set).unwrap();
        assert_eq!(
            hits,
            vec![
                TranslatedPosition::new(8, 10, 1, "A"),
                TranslatedPosition::new(21, 23, 1, "A"),
            ]
        );
    }

    #[test]
    fn test_results_follow_declaration_order() {
        let set = MappingSet::new(vec![
            seg(1, "C", (1, 50), (101, 150)),
            seg(1, "A", (1, 50), (1, 50)),
        ]);
        let hits = translate(5, 6, Direction::UnpToStruct, &set).unwrap();
        let chains: Vec<_> = hits.iter().map(|h| h.chain.as_str()).collect();
        assert_eq!(chains, vec!["C", "A"]);
        assert_eq!((hits[0].start, hits[0].end), (105, 106));
    }

    #[test]
    fn test_chain_label_follows_direction() {
        let set = MappingSet::new(vec![Segment::new(
            2,
            "H",
            "C",
            1,
            20,
            StructAnchor::new(1, 1, ""),
            StructAnchor::new(20, 20, ""),
        )]);
        let to_struct = translate(3, 4, Direction::UnpToStruct, &set).unwrap();
        assert_eq!(to_struct[0].chain, "C");
        let to_unp = translate(3, 4, Direction::StructToUnp, &set).unwrap();
        assert_eq!(to_unp[0].chain, "H");
        assert_eq!(to_unp[0].entity, 2);
    }

    #[test]
    fn test_inverted_segment_skipped() {
        let set = MappingSet::new(vec![
            seg(1, "A", (20, 10), (5, 15)),
            seg(1, "B", (10, 20), (5, 15)),
        ]);
        let hits = translate(12, 12, Direction::UnpToStruct, &set).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].chain, "B");
    }

    #[test]
    fn test_author_labels_carried_at_anchors() {
        let set = MappingSet::new(vec![Segment::new(
            1,
            "A",
            "A",
            10,
            20,
            StructAnchor::new(5, 100, "A"),
            StructAnchor::new(15, 109, ""),
        )]);
        let hits = translate(10, 20, Direction::UnpToStruct, &set).unwrap();
        let start_author = hits[0].start_author.as_ref().unwrap();
        assert_eq!(start_author.to_string(), "100A");
        assert_eq!(hits[0].end_author.as_ref().unwrap().number, 109);

        let hits = translate(12, 14, Direction::UnpToStruct, &set).unwrap();
        assert!(hits[0].start_author.is_none());
        assert!(hits[0].end_author.is_none());
    }

    #[test]
    fn test_insertion_codes_do_not_shift_arithmetic() {
        let set = MappingSet::new(vec![Segment::new(
            1,
            "L",
            "A",
            1,
            10,
            StructAnchor::new(1, 27, "A"),
            StructAnchor::new(10, 35, ""),
        )]);
        let hits = translate(2, 3, Direction::UnpToStruct, &set).unwrap();
        assert_eq!((hits[0].start, hits[0].end), (2, 3));
    }

    #[test]
    fn test_unequal_lengths_pin_both_ends() {
        // Source is two residues longer than target
        let source = ResidueRange::from_bounds(1, 12).unwrap();
        let target = ResidueRange::from_bounds(101, 110).unwrap();
        assert_eq!(map_boundary(1, &source, &target), Some(101));
        assert_eq!(map_boundary(12, &source, &target), Some(110));
        assert_eq!(map_boundary(3, &source, &target), Some(103));
        assert_eq!(map_boundary(10, &source, &target), Some(108));
    }

    #[test]
    fn test_map_boundary_clamps() {
        let source = ResidueRange::from_bounds(1, 20).unwrap();
        let target = ResidueRange::from_bounds(1, 4).unwrap();
        assert_eq!(map_boundary(8, &source, &target), Some(4));
        assert_eq!(map_boundary(13, &source, &target), Some(1));
    }

    #[test]
    fn test_overflowing_segment_skipped() {
        let set = MappingSet::new(vec![seg(1, "A", (i64::MIN, 10), (1, 10))]);
        let err = translate(5, 5, Direction::UnpToStruct, &set).unwrap_err();
        assert!(matches!(err, PositionMappingError::NoOverlap { .. }));

        let options = TranslateOptions::allowing_empty();
        let hits = translate_with_options(5, 5, Direction::UnpToStruct, &set, &options).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_overflowing_segment_does_not_hide_others() {
        let set = MappingSet::new(vec![
            seg(1, "A", (i64::MIN, 10), (1, 10)),
            seg(1, "B", (1, 10), (101, 110)),
        ]);
        let hits = translate(5, 5, Direction::UnpToStruct, &set).unwrap();
        assert_eq!(hits, vec![TranslatedPosition::new(105, 105, 1, "B")]);
    }

    #[test]
    fn test_map_boundary_overflow_is_none() {
        let source = ResidueRange::from_bounds(i64::MIN, 10).unwrap();
        let target = ResidueRange::from_bounds(1, 10).unwrap();
        assert_eq!(map_boundary(5, &source, &target), None);
    }

    #[test]
    fn test_mapping_set_untouched() {
        let set = single_segment();
        let before = set.clone();
        let _ = translate(12, 14, Direction::UnpToStruct, &set);
        assert_eq!(set, before);
    }
}
