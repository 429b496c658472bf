//! Subject (course) model.
//!
//! A subject describes the weekly teaching demand of one course: how many
//! lecture hours and how many lab hours it requires. Each required hour
//! becomes one session-request during demand expansion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of teaching session a request or entry represents.
///
/// Determines which room type satisfies it: lab sessions need `LAB`
/// rooms, lecture sessions need `LECTURE` rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    Lecture,
    Lab,
}

impl SessionType {
    /// Short code used in session-request ids ("LEC" / "LAB").
    pub fn code(&self) -> &'static str {
        match self {
            SessionType::Lecture => "LEC",
            SessionType::Lab => "LAB",
        }
    }

    /// Whether this is a lab session.
    #[inline]
    pub fn is_lab(&self) -> bool {
        matches!(self, SessionType::Lab)
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Lecture => f.write_str("LECTURE"),
            SessionType::Lab => f.write_str("LAB"),
        }
    }
}

/// A course with weekly lecture/lab hour requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Course code ("CS101").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Required lecture sessions per week.
    pub lecture_hours: u32,
    /// Required lab sessions per week.
    pub lab_hours: u32,
}

impl Subject {
    /// Creates a subject with no required hours.
    pub fn new(id: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            lecture_hours: 0,
            lab_hours: 0,
        }
    }

    /// Sets the weekly lecture hours.
    pub fn with_lecture_hours(mut self, hours: u32) -> Self {
        self.lecture_hours = hours;
        self
    }

    /// Sets the weekly lab hours.
    pub fn with_lab_hours(mut self, hours: u32) -> Self {
        self.lab_hours = hours;
        self
    }

    /// Whether this subject has a lab component (`lab_hours > 0`).
    pub fn is_lab(&self) -> bool {
        self.lab_hours > 0
    }

    /// Total required sessions per week.
    pub fn total_hours(&self) -> u32 {
        self.lecture_hours + self.lab_hours
    }
}
