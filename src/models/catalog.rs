//! Catalog: the immutable input snapshot for an allocation run.
//!
//! Bundles the five resource collections the engine consumes. The engine
//! never mutates a catalog; entities are created and edited by external
//! data-management flows.
//!
//! Lookups are lenient: an unknown id returns `None` rather than an
//! error. Callers that want dangling references rejected up front run
//! [`crate::validation::validate_catalog`] first.

use serde::{Deserialize, Serialize};

use super::{Batch, Faculty, Room, SessionType, Slot, Subject};

/// Snapshot of all schedulable resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Instructors, in catalog order (the allocator's faculty scan order).
    pub faculty: Vec<Faculty>,
    /// Subjects.
    pub subjects: Vec<Subject>,
    /// Rooms, in catalog order (the allocator's room scan order).
    pub rooms: Vec<Room>,
    /// Student cohorts.
    pub batches: Vec<Batch>,
    /// Teaching periods.
    pub slots: Vec<Slot>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a batch.
    pub fn with_batch(mut self, batch: Batch) -> Self {
        self.batches.push(batch);
        self
    }

    /// Sets the slot grid.
    pub fn with_slots(mut self, slots: Vec<Slot>) -> Self {
        self.slots = slots;
        self
    }

    /// Finds a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Finds a faculty member by id.
    pub fn faculty_member(&self, id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.id == id)
    }

    /// Finds a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Finds a batch by id.
    pub fn batch(&self, id: &str) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == id)
    }

    /// Finds a slot by id.
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Instructors qualified for a subject, in catalog order.
    pub fn qualified_faculty(&self, subject_id: &str) -> Vec<&Faculty> {
        self.faculty.iter().filter(|f| f.can_teach(subject_id)).collect()
    }

    /// Rooms that seat `batch_size` and match the session type, in
    /// catalog order.
    pub fn eligible_rooms(&self, batch_size: u32, session_type: SessionType) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.fits(batch_size) && r.suits(session_type))
            .collect()
    }
}
