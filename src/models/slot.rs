//! Teaching period (slot) model.
//!
//! A slot is one fixed weekday/hour period on the weekly grid. The full
//! slot set is configuration, not engine state: it is generated once and
//! handed to the engine read-only.
//!
//! # Grid
//! The standard grid is five weekdays of 1-hour periods from 09:00 to
//! 17:00 (40 slots). `period_index` is the 0-based hour offset from the
//! day's first period, so Monday 09:00 and Friday 09:00 share index 0.
//!
//! # Reference
//! de Werra (1985), "An introduction to timetabling"

use serde::{Deserialize, Serialize};
use std::fmt;

/// First teaching hour of the standard grid (09:00).
pub const DAY_START_HOUR: u32 = 9;
/// End of the teaching day on the standard grid (17:00, exclusive).
pub const DAY_END_HOUR: u32 = 17;

/// A weekday on the teaching grid.
///
/// Ordered chronologically, so sorting by `Day` spreads work from the
/// start of the week forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All teaching days, Monday first.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Three-letter day code used in slot ids ("MON".."FRI").
    pub fn code(&self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One fixed weekday/hour teaching period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier ("MON-9", "THU-14", ...).
    pub id: String,
    /// Weekday.
    pub day: Day,
    /// Period start ("9:00").
    pub start_time: String,
    /// Period end ("10:00").
    pub end_time: String,
    /// 0-based hour offset from the day's first period.
    pub period_index: u32,
}

impl Slot {
    /// Creates the slot starting at `hour` o'clock on `day`.
    ///
    /// `period_index` is derived from [`DAY_START_HOUR`].
    pub fn new(day: Day, hour: u32) -> Self {
        Self {
            id: format!("{}-{hour}", day.code()),
            day,
            start_time: format!("{hour}:00"),
            end_time: format!("{}:00", hour + 1),
            period_index: hour.saturating_sub(DAY_START_HOUR),
        }
    }

    /// Generates the standard Mon-Fri 09:00-17:00 grid (40 slots).
    ///
    /// Slots are emitted day-major (all of Monday, then Tuesday, ...);
    /// the allocator re-sorts into its own search order.
    pub fn standard_week() -> Vec<Slot> {
        let mut slots = Vec::with_capacity(Day::ALL.len() * (DAY_END_HOUR - DAY_START_HOUR) as usize);
        for day in Day::ALL {
            for hour in DAY_START_HOUR..DAY_END_HOUR {
                slots.push(Slot::new(day, hour));
            }
        }
        slots
    }
}
