//! Authored content tables: the fixed units a rotation cycles over.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One fixed, authored unit of a reading cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentUnit {
    /// 1-based position in the table. Stable; never reassigned.
    ///
    /// `day_index == 0` marks introductory material in raw table data and is
    /// dropped by the loader before the table is validated.
    pub day_index: u32,

    pub title: String,

    #[serde(default)]
    pub body: String,
}

/// Errors from content table construction.
///
/// A table that fails to construct is a configuration error: no content can
/// ever be computed from it, so these must not be swallowed.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("content table is empty")]
    Empty,

    #[error("json parse error: {message}")]
    Json { message: String },

    #[error("unit at position {position} has day_index {found}, expected {expected}")]
    OutOfOrder {
        position: usize,
        found: u32,
        expected: u32,
    },
}

/// Ordered, immutable table of authored content units.
///
/// Loaded once from static data and never mutated for the lifetime of the
/// process. Construction rejects empty or mis-numbered input, so consumers can
/// assume a dense `1..=len` day-index range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    units: Vec<ContentUnit>,
}

impl ContentTable {
    pub fn new(units: Vec<ContentUnit>) -> Result<Self, TableError> {
        if units.is_empty() {
            return Err(TableError::Empty);
        }
        for (position, unit) in units.iter().enumerate() {
            let expected = position as u32 + 1;
            if unit.day_index != expected {
                return Err(TableError::OutOfOrder {
                    position,
                    found: unit.day_index,
                    expected,
                });
            }
        }
        Ok(Self { units })
    }

    /// Parse a table from raw JSON (an array of [`ContentUnit`] objects).
    ///
    /// Entries with `day_index == 0` are introductory material and are dropped
    /// before validation; the rotation only ever cycles over the numbered
    /// units.
    pub fn from_json_str(raw: &str) -> Result<Self, TableError> {
        let units: Vec<ContentUnit> =
            serde_json::from_str(raw).map_err(|e| TableError::Json {
                message: e.to_string(),
            })?;
        let units: Vec<ContentUnit> = units.into_iter().filter(|u| u.day_index != 0).collect();
        Self::new(units)
    }

    /// The standard 30-day Psalms reading plan (monthly division).
    pub fn psalms_month() -> Self {
        const RANGES: [&str; 30] = [
            "1\u{2013}9",
            "10\u{2013}17",
            "18\u{2013}22",
            "23\u{2013}28",
            "29\u{2013}34",
            "35\u{2013}38",
            "39\u{2013}43",
            "44\u{2013}48",
            "49\u{2013}54",
            "55\u{2013}59",
            "60\u{2013}65",
            "66\u{2013}68",
            "69\u{2013}71",
            "72\u{2013}76",
            "77\u{2013}78",
            "79\u{2013}82",
            "83\u{2013}87",
            "88\u{2013}89",
            "90\u{2013}96",
            "97\u{2013}103",
            "104\u{2013}105",
            "106\u{2013}107",
            "108\u{2013}112",
            "113\u{2013}118",
            "119:1\u{2013}96",
            "119:97\u{2013}176",
            "120\u{2013}134",
            "135\u{2013}139",
            "140\u{2013}144",
            "145\u{2013}150",
        ];

        let units = RANGES
            .iter()
            .enumerate()
            .map(|(i, range)| ContentUnit {
                day_index: i as u32 + 1,
                title: format!("Day {}", i + 1),
                body: format!("Psalms {range}"),
            })
            .collect();

        Self::new(units).expect("built-in psalms table is valid")
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit at a 0-based cycle index.
    pub fn get(&self, index: usize) -> Option<&ContentUnit> {
        self.units.get(index)
    }

    pub fn units(&self) -> &[ContentUnit] {
        &self.units
    }
}
