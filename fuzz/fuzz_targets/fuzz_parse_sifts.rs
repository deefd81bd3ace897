//! Fuzz target for the SIFTS document decoder
//!
//! Feeds arbitrary byte strings to the JSON decoder and, when a document
//! decodes, builds and validates every mapping set it contains.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if input.len() > 10_000 {
            return;
        }

        if let Ok(doc) = ferro_sifts::SiftsDocument::parse(input) {
            let ids: Vec<String> = doc.entry_ids().map(str::to_string).collect();
            for id in ids {
                if let Ok(set) = doc.entry_mapping_set(&id) {
                    let _ = set.validate();
                }
            }
        }
    }
});
