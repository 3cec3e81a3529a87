//! Pure rotation computation over already-fetched inputs.
//!
//! Everything here is deterministic in its arguments: no clock, no
//! randomness, no I/O. Same `(hebrew_day, offset, state, table)` in, same
//! content out.

use luach_types::content::ContentTable;
use luach_types::display::{ContentSource, DisplayedContent};
use luach_types::state::CycleState;

/// Map a calendar day and offset onto a 0-based table index.
///
/// The double mod keeps the result in `0..table_len` for any integer offset,
/// including negative ones, and lets out-of-range day inputs (day 30 of a
/// 29-day month, or a caller passing 31) wrap instead of erroring.
pub fn cycle_index(hebrew_day: u8, offset: i64, table_len: usize) -> usize {
    let n = table_len as i64;
    let shifted = (i64::from(hebrew_day) - offset - 1) % n;
    ((shifted + n) % n) as usize
}

/// Freshness check for a manual override.
///
/// An override carries no explicit expiry; its title embeds the rendered date
/// label it was written for, and the substring test here is what retires it
/// once the date changes. Inherited behavior, kept for compatibility with
/// existing records.
///
/// An empty `today_label` never matches: `contains("")` is always true, which
/// would make any override permanent under a degenerate label.
pub fn override_matches_date(state: &CycleState, today_label: &str) -> bool {
    !today_label.is_empty() && state.has_override() && state.override_title.contains(today_label)
}

/// Resolve the content to display for one rotation instance.
///
/// Returns the active override when its title matches today's label,
/// otherwise the automatic pick: `table[cycle_index]` with the title rendered
/// as `"<unit title> - <today label>"`.
pub fn resolve_today(
    hebrew_day: u8,
    today_label: &str,
    state: &CycleState,
    table: &ContentTable,
) -> DisplayedContent {
    if override_matches_date(state, today_label) {
        return DisplayedContent {
            title: state.override_title.clone(),
            body: state.override_body.clone(),
            image_url: state.override_image.clone(),
            updated_at: state.updated_at,
            source: ContentSource::Override,
        };
    }

    let index = cycle_index(hebrew_day, state.offset, table.len());
    let unit = table
        .get(index)
        .expect("cycle_index is in range for a validated table");

    DisplayedContent {
        title: format!("{} - {}", unit.title, today_label),
        body: unit.body.clone(),
        image_url: None,
        updated_at: None,
        source: ContentSource::Automatic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_types::content::ContentUnit;
    use pretty_assertions::assert_eq;

    fn gates_table() -> ContentTable {
        let units = (1..=30)
            .map(|i| ContentUnit {
                day_index: i,
                title: format!("Gate {i}"),
                body: format!("passage {i}"),
            })
            .collect();
        ContentTable::new(units).expect("table")
    }

    #[test]
    fn natural_cycle_maps_day_to_same_index() {
        assert_eq!(cycle_index(1, 0, 30), 0);
        assert_eq!(cycle_index(15, 0, 30), 14);
        assert_eq!(cycle_index(30, 0, 30), 29);
    }

    #[test]
    fn offset_shifts_the_pick() {
        assert_eq!(cycle_index(15, 14, 30), 0);
        assert_eq!(cycle_index(16, 14, 30), 1);
    }

    #[test]
    fn out_of_range_day_wraps() {
        assert_eq!(cycle_index(31, 5, 30), cycle_index(1, 5, 30));
    }

    #[test]
    fn negative_offset_is_congruent_mod_table_len() {
        for day in 1..=30 {
            assert_eq!(cycle_index(day, -3, 30), cycle_index(day, 27, 30));
        }
    }

    #[test]
    fn each_day_visits_a_distinct_unit() {
        let mut seen = [false; 30];
        for day in 1..=30u8 {
            seen[cycle_index(day, 7, 30)] = true;
        }
        assert!(seen.iter().all(|v| *v));
    }

    #[test]
    fn automatic_title_appends_day_label() {
        let content = resolve_today(3, "3 Elul", &CycleState::default(), &gates_table());
        assert_eq!(content.title, "Gate 3 - 3 Elul");
        assert_eq!(content.body, "passage 3");
        assert_eq!(content.source, ContentSource::Automatic);
        assert_eq!(content.image_url, None);
    }

    #[test]
    fn matching_override_wins() {
        let state = CycleState {
            override_title: "Special reading - 3 Elul".to_string(),
            override_body: "hand-entered".to_string(),
            ..CycleState::default()
        };
        let content = resolve_today(3, "3 Elul", &state, &gates_table());
        assert_eq!(content.source, ContentSource::Override);
        assert_eq!(content.title, "Special reading - 3 Elul");
        assert_eq!(content.body, "hand-entered");
    }

    #[test]
    fn stale_override_falls_back_silently() {
        let state = CycleState {
            override_title: "Special reading - 3 Elul".to_string(),
            override_body: "hand-entered".to_string(),
            ..CycleState::default()
        };
        let content = resolve_today(4, "4 Elul", &state, &gates_table());
        assert_eq!(content.source, ContentSource::Automatic);
        assert_eq!(content.title, "Gate 4 - 4 Elul");
    }

    #[test]
    fn empty_label_never_matches_an_override() {
        let state = CycleState {
            override_title: "Special reading".to_string(),
            override_body: "hand-entered".to_string(),
            ..CycleState::default()
        };
        assert!(!override_matches_date(&state, ""));
        let content = resolve_today(1, "", &state, &gates_table());
        assert_eq!(content.source, ContentSource::Automatic);
    }

    #[test]
    fn blank_override_never_matches() {
        assert!(!override_matches_date(&CycleState::default(), "3 Elul"));
    }
}
