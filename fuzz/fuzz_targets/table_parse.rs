#![no_main]

//! Fuzz target for content table loading.
//!
//! Feeds arbitrary bytes through `ContentTable::from_json_str` to ensure the
//! loader (including the intro-unit exclusion and index validation) never
//! panics on malformed input.

use libfuzzer_sys::fuzz_target;
use luach_types::content::ContentTable;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Must reject or accept, never panic.
    if let Ok(table) = ContentTable::from_json_str(s) {
        // A constructed table is dense and non-empty.
        assert!(!table.is_empty());
        for (i, unit) in table.units().iter().enumerate() {
            assert_eq!(unit.day_index as usize, i + 1);
        }
    }
});
