//! Fuzz target for the translator
//!
//! Builds a mapping set from arbitrary integers and translates an arbitrary
//! range through it. Translation must never panic, and every result must sit
//! inside the target side of some segment.

#![no_main]

use ferro_sifts::{translate, Direction, MappingSet, Segment, StructAnchor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<(i64, i64, i64, i64)>, i64, i64, bool)| {
    let (rows, start, end, to_unp) = input;
    if rows.len() > 64 {
        return;
    }

    let set: MappingSet = rows
        .iter()
        .map(|&(us, ue, ss, se)| {
            Segment::new(
                1,
                "A",
                "A",
                us,
                ue,
                StructAnchor::new(ss, ss, ""),
                StructAnchor::new(se, se, ""),
            )
        })
        .collect();

    let direction = if to_unp {
        Direction::StructToUnp
    } else {
        Direction::UnpToStruct
    };

    if let Ok(results) = translate(start, end, direction, &set) {
        for r in results {
            assert!(r.start <= r.end);
            let inside = rows.iter().any(|&(us, ue, ss, se)| {
                let (lo, hi) = if to_unp { (us, ue) } else { (ss, se) };
                r.start >= lo && r.end <= hi
            });
            assert!(inside);
        }
    }
});
