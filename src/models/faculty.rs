//! Faculty (instructor) model.
//!
//! A faculty member may teach only the subjects listed in their
//! expertise. The weekly-hour cap `max_load` is advisory: the allocator
//! does not enforce it, but [`crate::stats::TimetableStats`] surfaces
//! instructors scheduled past it.

use serde::{Deserialize, Serialize};

/// An instructor who can be assigned to sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Owning department.
    pub department: String,
    /// Advisory weekly-hour cap. Not enforced during allocation.
    pub max_load: u32,
    /// Subject ids this instructor may teach, in declaration order.
    pub expertise: Vec<String>,
}

impl Faculty {
    /// Creates a faculty member with no expertise.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: String::new(),
            max_load: 0,
            expertise: Vec::new(),
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the advisory weekly-hour cap.
    pub fn with_max_load(mut self, max_load: u32) -> Self {
        self.max_load = max_load;
        self
    }

    /// Adds a subject id to this instructor's expertise.
    pub fn with_expertise(mut self, subject_id: impl Into<String>) -> Self {
        self.expertise.push(subject_id.into());
        self
    }

    /// Whether this instructor may teach the given subject.
    pub fn can_teach(&self, subject_id: &str) -> bool {
        self.expertise.iter().any(|s| s == subject_id)
    }
}
