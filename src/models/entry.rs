//! Committed schedule entries and the bulk run result.
//!
//! A [`ScheduleEntry`] is one finalized (slot, subject, faculty, room,
//! batch) assignment. A [`Timetable`] is the output of a bulk allocation
//! run: the committed entries plus the conflicts for every
//! session-request that could not be placed.

use serde::{Deserialize, Serialize};

use super::Conflict;

/// A finalized assignment of one session to a slot/faculty/room triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Occupied slot.
    pub slot_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Assigned instructor.
    pub faculty_id: String,
    /// Assigned room.
    pub room_id: String,
    /// Attending batch.
    pub batch_id: String,
    /// Whether the entry was placed manually (locked) rather than by a
    /// bulk generation run.
    pub is_locked: bool,
}

impl ScheduleEntry {
    /// Creates an unlocked entry.
    pub fn new(
        id: impl Into<String>,
        slot_id: impl Into<String>,
        subject_id: impl Into<String>,
        faculty_id: impl Into<String>,
        room_id: impl Into<String>,
        batch_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slot_id: slot_id.into(),
            subject_id: subject_id.into(),
            faculty_id: faculty_id.into(),
            room_id: room_id.into(),
            batch_id: batch_id.into(),
            is_locked: false,
        }
    }

    /// Marks the entry as manually placed.
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Whether this entry occupies the given slot for any of the given
    /// batch, faculty, or room.
    pub fn clashes_with(&self, slot_id: &str, batch_id: &str, faculty_id: &str, room_id: &str) -> bool {
        self.slot_id == slot_id
            && (self.batch_id == batch_id || self.faculty_id == faculty_id || self.room_id == room_id)
    }
}

/// Result of a bulk allocation run.
///
/// Every session-request from demand expansion appears exactly once:
/// either as a committed entry or as a conflict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed entries.
    pub entries: Vec<ScheduleEntry>,
    /// Requests the allocator could not satisfy.
    pub conflicts: Vec<Conflict>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a committed entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Whether every session-request was placed.
    pub fn is_feasible(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of committed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The entry occupying `slot_id` for `batch_id`, if any.
    ///
    /// At most one exists in a valid schedule.
    pub fn entry_at(&self, slot_id: &str, batch_id: &str) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.slot_id == slot_id && e.batch_id == batch_id)
    }

    /// All entries for a batch.
    pub fn entries_for_batch(&self, batch_id: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.batch_id == batch_id).collect()
    }

    /// All entries taught by an instructor.
    pub fn entries_for_faculty(&self, faculty_id: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.faculty_id == faculty_id).collect()
    }

    /// All entries held in a room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.room_id == room_id).collect()
    }

    /// Weekly hours committed for an instructor.
    ///
    /// Compare against [`crate::models::Faculty::max_load`]; the
    /// allocator itself treats the cap as advisory.
    pub fn faculty_load(&self, faculty_id: &str) -> usize {
        self.entries.iter().filter(|e| e.faculty_id == faculty_id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.add_entry(ScheduleEntry::new("e1", "MON-9", "sub-1", "fac-1", "r-101", "b-1"));
        t.add_entry(ScheduleEntry::new("e2", "MON-9", "sub-2", "fac-2", "r-102", "b-2"));
        t.add_entry(ScheduleEntry::new("e3", "TUE-9", "sub-1", "fac-1", "r-101", "b-1"));
        t
    }

    #[test]
    fn test_entry_queries() {
        let t = sample_timetable();
        assert_eq!(t.entry_count(), 3);
        assert_eq!(t.entry_at("MON-9", "b-2").unwrap().id, "e2");
        assert!(t.entry_at("MON-9", "b-3").is_none());
        assert_eq!(t.entries_for_batch("b-1").len(), 2);
        assert_eq!(t.entries_for_faculty("fac-2").len(), 1);
        assert_eq!(t.entries_for_room("r-101").len(), 2);
    }

    #[test]
    fn test_faculty_load() {
        let t = sample_timetable();
        assert_eq!(t.faculty_load("fac-1"), 2);
        assert_eq!(t.faculty_load("fac-2"), 1);
        assert_eq!(t.faculty_load("fac-9"), 0);
    }

    #[test]
    fn test_clashes_with() {
        let e = ScheduleEntry::new("e1", "MON-9", "sub-1", "fac-1", "r-101", "b-1");
        assert!(e.clashes_with("MON-9", "b-1", "fac-9", "r-109"));
        assert!(e.clashes_with("MON-9", "b-9", "fac-1", "r-109"));
        assert!(e.clashes_with("MON-9", "b-9", "fac-9", "r-101"));
        assert!(!e.clashes_with("MON-9", "b-9", "fac-9", "r-109"));
        assert!(!e.clashes_with("TUE-9", "b-1", "fac-1", "r-101"));
    }

    #[test]
    fn test_locked_builder() {
        let e = ScheduleEntry::new("e1", "MON-9", "sub-1", "fac-1", "r-101", "b-1");
        assert!(!e.is_locked);
        assert!(e.locked().is_locked);
    }

    #[test]
    fn test_empty_timetable_is_feasible() {
        let t = Timetable::new();
        assert!(t.is_feasible());
        assert_eq!(t.entry_count(), 0);
    }
}
