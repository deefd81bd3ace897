//! Translation behavior tests
//!
//! Case tables for the public translate API against small hand-built
//! mapping sets.

use ferro_sifts::{
    translate, translate_with_options, Direction, ErrorCode, MappingSet, PositionMappingError,
    Segment, StructAnchor, TranslateOptions, TranslatedPosition,
};
use rstest::rstest;

fn anchor(n: i64) -> StructAnchor {
    StructAnchor::new(n, n, "")
}

/// Entity 1 chain A: UNP 10..20 <-> residues 5..15
fn single_segment() -> MappingSet {
    MappingSet::new(vec![Segment::new(
        1,
        "A",
        "A",
        10,
        20,
        anchor(5),
        anchor(15),
    )])
}

/// Chain A split by an unobserved loop: UNP 1..50 -> 1..50, UNP 51..100 -> 61..110
fn two_adjacent_segments() -> MappingSet {
    MappingSet::new(vec![
        Segment::new(1, "A", "A", 1, 50, anchor(1), anchor(50)),
        Segment::new(1, "A", "A", 51, 100, anchor(61), anchor(110)),
    ])
}

/// Homodimer: same UNP range on author chains A and B (label chains A and C)
fn homodimer() -> MappingSet {
    MappingSet::new(vec![
        Segment::new(1, "A", "A", 10, 20, anchor(5), anchor(15)),
        Segment::new(1, "B", "C", 10, 20, anchor(105), anchor(115)),
    ])
}

// ===== Basic translation =====

#[rstest]
#[case(12, 14, 7, 9)]
#[case(10, 20, 5, 15)]
#[case(10, 10, 5, 5)]
#[case(20, 20, 15, 15)]
#[case(1, 12, 5, 7)]
#[case(18, 400, 13, 15)]
#[case(1, 1000, 5, 15)]
fn test_unp_to_struct_single_segment(
    #[case] start: i64,
    #[case] end: i64,
    #[case] expected_start: i64,
    #[case] expected_end: i64,
) {
    let results = translate(start, end, Direction::UnpToStruct, &single_segment()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].start, expected_start);
    assert_eq!(results[0].end, expected_end);
    assert_eq!(results[0].entity, 1);
    assert_eq!(results[0].chain, "A");
}

#[rstest]
#[case(7, 9, 12, 14)]
#[case(5, 15, 10, 20)]
#[case(1, 6, 10, 11)]
#[case(15, 99, 20, 20)]
fn test_struct_to_unp_single_segment(
    #[case] start: i64,
    #[case] end: i64,
    #[case] expected_start: i64,
    #[case] expected_end: i64,
) {
    let results = translate(start, end, Direction::StructToUnp, &single_segment()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!((results[0].start, results[0].end), (expected_start, expected_end));
}

#[test]
fn test_documented_example() {
    let results = translate(12, 14, Direction::UnpToStruct, &single_segment()).unwrap();
    assert_eq!(results, vec![TranslatedPosition {
        start: 7,
        end: 9,
        entity: 1,
        chain: "A".to_string(),
        start_author: None,
        end_author: None,
    }]);
}

// ===== Fan-out across segments =====

#[test]
fn test_range_spanning_adjacent_segments() {
    let results = translate(45, 55, Direction::UnpToStruct, &two_adjacent_segments()).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!((results[0].start, results[0].end), (45, 50));
    assert_eq!((results[1].start, results[1].end), (61, 65));
}

#[test]
fn test_structural_gap_not_filled() {
    // Residues 51..60 are not aligned to anything
    let err = translate(52, 58, Direction::StructToUnp, &two_adjacent_segments()).unwrap_err();
    assert!(matches!(err, PositionMappingError::NoOverlap { .. }));

    let results = translate(45, 65, Direction::StructToUnp, &two_adjacent_segments()).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!((results[0].start, results[0].end), (45, 50));
    assert_eq!((results[1].start, results[1].end), (51, 55));
}

#[test]
fn test_homodimer_yields_one_result_per_chain() {
    let results = translate(12, 14, Direction::UnpToStruct, &homodimer()).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].chain, "A");
    assert_eq!((results[0].start, results[0].end), (7, 9));
    assert_eq!(results[1].chain, "C");
    assert_eq!((results[1].start, results[1].end), (107, 109));
}

#[rstest]
#[case(Direction::UnpToStruct, 12, 14, "C")]
#[case(Direction::StructToUnp, 107, 109, "B")]
fn test_chain_label_depends_on_direction(
    #[case] direction: Direction,
    #[case] start: i64,
    #[case] end: i64,
    #[case] expected_chain: &str,
) {
    let results = translate(start, end, direction, &homodimer()).unwrap();
    let last = results.last().unwrap();
    assert_eq!(last.chain, expected_chain);
}

#[test]
fn test_results_follow_mapping_order() {
    let set = MappingSet::new(vec![
        Segment::new(1, "A", "A", 51, 100, anchor(61), anchor(110)),
        Segment::new(1, "A", "A", 1, 50, anchor(1), anchor(50)),
    ]);
    let results = translate(1, 100, Direction::UnpToStruct, &set).unwrap();
    assert_eq!(results[0].start, 61);
    assert_eq!(results[1].start, 1);
}

// ===== Failures =====

#[rstest]
#[case(300, 310)]
#[case(1, 9)]
#[case(21, 21)]
fn test_out_of_range_errors(#[case] start: i64, #[case] end: i64) {
    let err = translate(start, end, Direction::UnpToStruct, &single_segment()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoStructuralCoverage);
    assert_eq!(err.user_message(), "No structural coverage for this region");
}

#[rstest]
#[case(14, 12)]
#[case(0, 5)]
#[case(-3, 5)]
#[case(0, 0)]
fn test_malformed_range_errors(#[case] start: i64, #[case] end: i64) {
    for direction in [Direction::UnpToStruct, Direction::StructToUnp] {
        let err = translate(start, end, direction, &single_segment()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRange);
        assert!(!err.is_missing_coverage());
    }
}

#[test]
fn test_malformed_range_reported_before_empty_set() {
    let err = translate(9, 3, Direction::UnpToStruct, &MappingSet::empty()).unwrap_err();
    assert!(matches!(err, PositionMappingError::InvalidRange { .. }));
}

#[test]
fn test_empty_mapping_set_errors() {
    let err = translate(1, 5, Direction::UnpToStruct, &MappingSet::empty()).unwrap_err();
    assert_eq!(err, PositionMappingError::EmptyMappingSet);
}

// ===== Options =====

#[test]
fn test_allow_empty_only_affects_missing_overlap() {
    let options = TranslateOptions::allowing_empty();

    let results =
        translate_with_options(300, 310, Direction::UnpToStruct, &single_segment(), &options)
            .unwrap();
    assert!(results.is_empty());

    assert!(
        translate_with_options(5, 1, Direction::UnpToStruct, &single_segment(), &options).is_err()
    );
    assert!(
        translate_with_options(1, 5, Direction::UnpToStruct, &MappingSet::empty(), &options)
            .is_err()
    );
}

// ===== Author labels =====

#[test]
fn test_author_labels_on_anchor_boundaries() {
    let set = MappingSet::new(vec![Segment::new(
        1,
        "A",
        "A",
        10,
        20,
        StructAnchor::new(5, 52, "A"),
        StructAnchor::new(15, 62, ""),
    )]);
    let results = translate(10, 20, Direction::UnpToStruct, &set).unwrap();
    let start_author = results[0].start_author.as_ref().unwrap();
    assert_eq!(start_author.to_string(), "52A");
    assert_eq!(results[0].end_author.as_ref().unwrap().number, 62);

    // Interior boundaries carry no author label
    let results = translate(12, 14, Direction::UnpToStruct, &set).unwrap();
    assert!(results[0].start_author.is_none());
    assert!(results[0].end_author.is_none());
}
