#![no_main]

//! Fuzz target for cycle state documents.
//!
//! Parses arbitrary bytes as a `CycleState` document and, when parsing
//! succeeds, round-trips it back through the serializer.

use libfuzzer_sys::fuzz_target;
use luach_types::state::{CycleState, StatePatch};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(state) = serde_json::from_str::<CycleState>(s) {
        let _ = serde_json::to_string(&state);
        let _ = serde_json::to_string_pretty(&state);
    }

    // Patches travel over the same boundary.
    if let Ok(patch) = serde_json::from_str::<StatePatch>(s) {
        let mut state = CycleState::default();
        patch.apply_to(&mut state);
        let _ = serde_json::to_string(&state);
    }
});
