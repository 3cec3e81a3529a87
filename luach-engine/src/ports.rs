//! Port trait abstracting the calendar away from the rotation.

/// Source of the current Hebrew calendar day.
///
/// The astronomical computation lives outside this crate; hosts hand in
/// whatever their calendar library produced.
pub trait DaySource {
    /// Day of the Hebrew month, 1..=30.
    ///
    /// Day 30 reported during a 29-day month is tolerated: the rotation wraps
    /// by modular arithmetic rather than rejecting the input.
    fn day_of_month(&self) -> u8;

    /// Rendered date label for "now", e.g. a formatted Hebrew date string.
    ///
    /// This is also the override-matching key, so it must be stable for the
    /// whole calendar day.
    fn label(&self) -> String;
}

/// A day resolved up front, for hosts that already ran the calendar.
#[derive(Debug, Clone)]
pub struct FixedDay {
    day: u8,
    label: String,
}

impl FixedDay {
    pub fn new(day: u8, label: impl Into<String>) -> Self {
        Self {
            day,
            label: label.into(),
        }
    }
}

impl DaySource for FixedDay {
    fn day_of_month(&self) -> u8 {
        self.day
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}
