//! Batch (student cohort) model.
//!
//! A batch is a group of students taking a fixed curriculum: an ordered
//! list of subject ids, each of which must be fully scheduled every week.

use serde::{Deserialize, Serialize};

/// A student cohort with its curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Student count. Rooms must seat at least this many.
    pub size: u32,
    /// Program the batch belongs to ("UG", "PG", ...).
    pub program: String,
    /// Subject ids the batch must take, in curriculum order.
    pub subjects: Vec<String>,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new(id: impl Into<String>, name: impl Into<String>, size: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            program: String::new(),
            subjects: Vec::new(),
        }
    }

    /// Sets the program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Adds a subject id to the curriculum.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_builder() {
        let b = Batch::new("b-1", "B.Tech CS Year 1", 58)
            .with_program("UG")
            .with_subject("sub-1")
            .with_subject("sub-2");

        assert_eq!(b.id, "b-1");
        assert_eq!(b.size, 58);
        assert_eq!(b.program, "UG");
        assert_eq!(b.subjects, vec!["sub-1", "sub-2"]);
    }
}
