//! Interactive single-entry booking.
//!
//! Validates one proposed manual entry against the committed schedule
//! and, on success, appends it as a locked entry. This is the same
//! occupancy rule set the bulk allocator enforces, applied to the
//! authoritative entry list instead of a run-scoped tracker.
//!
//! # Clash reporting
//! The first committed entry sharing the requested slot and any of the
//! batch, faculty, or room decides the rejection. The message is chosen
//! by priority from that entry: batch clash over faculty clash over room
//! clash. Exactly one reason is reported.
//!
//! # Strict mode
//! By default only the three slot clashes are checked; expertise,
//! capacity, and room-type filtering is assumed to happen upstream
//! (option filtering in a UI). [`BookingValidator::strict`] re-checks
//! those invariants here, for deployments where nothing filters
//! upstream.
//!
//! # Concurrency
//! Validation-then-append is a read-check-append sequence. If concurrent
//! bookings are possible, the caller must apply it atomically against
//! the authoritative list (single writer or compare-and-swap), or two
//! bookings may both validate against a stale list and commit a
//! conflicting pair.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Catalog, ScheduleEntry};

/// A proposed manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Requested slot.
    pub slot_id: String,
    /// Subject to teach.
    pub subject_id: String,
    /// Attending batch.
    pub batch_id: String,
    /// Assigned instructor.
    pub faculty_id: String,
    /// Assigned room.
    pub room_id: String,
}

impl BookingRequest {
    /// Creates a booking request.
    pub fn new(
        slot_id: impl Into<String>,
        subject_id: impl Into<String>,
        batch_id: impl Into<String>,
        faculty_id: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            slot_id: slot_id.into(),
            subject_id: subject_id.into(),
            batch_id: batch_id.into(),
            faculty_id: faculty_id.into(),
            room_id: room_id.into(),
        }
    }
}

/// Why a proposed booking was rejected.
///
/// Always recoverable: the caller picks a different slot or resource and
/// retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The batch already has a class in the requested slot.
    #[error("This batch already has a class in this slot.")]
    BatchBusy,
    /// The instructor already teaches in the requested slot.
    #[error("Faculty is already teaching in this slot.")]
    FacultyBusy,
    /// The room is already occupied in the requested slot.
    #[error("Room is already occupied in this slot.")]
    RoomBusy,
    /// Strict mode: the instructor is not qualified for the subject.
    #[error("Faculty is not qualified to teach this subject.")]
    NotQualified,
    /// Strict mode: the room does not seat the batch.
    #[error("Room is too small for this batch.")]
    RoomTooSmall,
    /// Strict mode: lab/lecture room type does not match the subject.
    #[error("Room type does not match the session type.")]
    RoomTypeMismatch,
    /// Strict mode: a referenced id does not resolve in the catalog.
    #[error("Unknown {kind} id: {id}")]
    UnknownReference {
        /// Which collection failed to resolve ("subject", "faculty", ...).
        kind: &'static str,
        /// The unresolved id.
        id: String,
    },
}

/// Validates and applies manual bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingValidator {
    strict: bool,
}

impl BookingValidator {
    /// Creates a validator that checks slot clashes only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator that additionally re-checks expertise,
    /// capacity, and room-type invariants against the catalog.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Checks a proposed entry against the committed schedule.
    pub fn validate(
        &self,
        catalog: &Catalog,
        schedule: &[ScheduleEntry],
        request: &BookingRequest,
    ) -> Result<(), BookingError> {
        if let Some(entry) = schedule.iter().find(|e| {
            e.clashes_with(
                &request.slot_id,
                &request.batch_id,
                &request.faculty_id,
                &request.room_id,
            )
        }) {
            return Err(if entry.batch_id == request.batch_id {
                BookingError::BatchBusy
            } else if entry.faculty_id == request.faculty_id {
                BookingError::FacultyBusy
            } else {
                BookingError::RoomBusy
            });
        }

        if self.strict {
            self.check_invariants(catalog, request)?;
        }

        Ok(())
    }

    /// Validates the request and, on success, returns the schedule with
    /// the new entry appended.
    ///
    /// The appended entry is locked and carries the deterministic id
    /// `manual-{slot}-{batch}`, which is unique in any schedule where no
    /// batch is double-booked.
    pub fn book(
        &self,
        catalog: &Catalog,
        schedule: &[ScheduleEntry],
        request: &BookingRequest,
    ) -> Result<Vec<ScheduleEntry>, BookingError> {
        self.validate(catalog, schedule, request)?;

        let entry = ScheduleEntry::new(
            format!("manual-{}-{}", request.slot_id, request.batch_id),
            &request.slot_id,
            &request.subject_id,
            &request.faculty_id,
            &request.room_id,
            &request.batch_id,
        )
        .locked();

        let mut next = schedule.to_vec();
        next.push(entry);
        Ok(next)
    }

    fn check_invariants(
        &self,
        catalog: &Catalog,
        request: &BookingRequest,
    ) -> Result<(), BookingError> {
        let unknown = |kind: &'static str, id: &str| BookingError::UnknownReference {
            kind,
            id: id.to_string(),
        };

        let subject = catalog
            .subject(&request.subject_id)
            .ok_or_else(|| unknown("subject", &request.subject_id))?;
        let faculty = catalog
            .faculty_member(&request.faculty_id)
            .ok_or_else(|| unknown("faculty", &request.faculty_id))?;
        let room = catalog
            .room(&request.room_id)
            .ok_or_else(|| unknown("room", &request.room_id))?;
        let batch = catalog
            .batch(&request.batch_id)
            .ok_or_else(|| unknown("batch", &request.batch_id))?;
        catalog
            .slot(&request.slot_id)
            .ok_or_else(|| unknown("slot", &request.slot_id))?;

        if !faculty.can_teach(&subject.id) {
            return Err(BookingError::NotQualified);
        }
        if !room.fits(batch.size) {
            return Err(BookingError::RoomTooSmall);
        }
        // A manual entry for a subject with any lab component is booked
        // as a lab session, mirroring the bulk lab/lecture room rule.
        let wants_lab = subject.is_lab();
        if wants_lab != matches!(room.room_type, crate::models::RoomType::Lab) {
            return Err(BookingError::RoomTypeMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Batch, Faculty, Room, RoomType, Slot, Subject};

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_subject(Subject::new("sub-1", "CS101", "Intro to Programming").with_lecture_hours(3))
            .with_subject(
                Subject::new("sub-2", "PH101", "Physics I")
                    .with_lecture_hours(3)
                    .with_lab_hours(2),
            )
            .with_faculty(Faculty::new("fac-1", "Dr. Alan Turing").with_expertise("sub-1"))
            .with_faculty(Faculty::new("fac-2", "Prof. Ada Lovelace").with_expertise("sub-2"))
            .with_room(Room::new("r-101", "Hall 101", 65, RoomType::Lecture))
            .with_room(Room::new("r-201", "Lab A", 65, RoomType::Lab))
            .with_room(Room::new("r-401", "Smart Class 401", 50, RoomType::Lecture))
            .with_batch(Batch::new("b-1", "Year 1", 58).with_subject("sub-1"))
            .with_batch(Batch::new("b-2", "Year 2", 55).with_subject("sub-1"))
            .with_slots(Slot::standard_week())
    }

    fn committed() -> Vec<ScheduleEntry> {
        vec![ScheduleEntry::new("e1", "MON-9", "sub-1", "fac-1", "r-101", "b-1")]
    }

    #[test]
    fn test_batch_clash_rejected() {
        let result = BookingValidator::new().book(
            &sample_catalog(),
            &committed(),
            &BookingRequest::new("MON-9", "sub-2", "b-1", "fac-2", "r-201"),
        );
        let err = result.unwrap_err();
        assert_eq!(err, BookingError::BatchBusy);
        assert_eq!(err.to_string(), "This batch already has a class in this slot.");
    }

    #[test]
    fn test_faculty_clash_rejected() {
        let err = BookingValidator::new()
            .validate(
                &sample_catalog(),
                &committed(),
                &BookingRequest::new("MON-9", "sub-1", "b-2", "fac-1", "r-201"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::FacultyBusy);
        assert_eq!(err.to_string(), "Faculty is already teaching in this slot.");
    }

    #[test]
    fn test_room_clash_rejected() {
        let err = BookingValidator::new()
            .validate(
                &sample_catalog(),
                &committed(),
                &BookingRequest::new("MON-9", "sub-2", "b-2", "fac-2", "r-101"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::RoomBusy);
        assert_eq!(err.to_string(), "Room is already occupied in this slot.");
    }

    #[test]
    fn test_batch_message_takes_priority() {
        // The clashing entry matches on batch, faculty, and room at
        // once; only the batch message surfaces.
        let err = BookingValidator::new()
            .validate(
                &sample_catalog(),
                &committed(),
                &BookingRequest::new("MON-9", "sub-1", "b-1", "fac-1", "r-101"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::BatchBusy);
    }

    #[test]
    fn test_successful_booking_appends_locked_entry() {
        let catalog = sample_catalog();
        let schedule = committed();
        let request = BookingRequest::new("TUE-10", "sub-2", "b-2", "fac-2", "r-201");

        let next = BookingValidator::new().book(&catalog, &schedule, &request).unwrap();

        assert_eq!(next.len(), schedule.len() + 1);
        let added = next.last().unwrap();
        assert_eq!(added.id, "manual-TUE-10-b-2");
        assert_eq!(added.slot_id, "TUE-10");
        assert_eq!(added.batch_id, "b-2");
        assert!(added.is_locked);
        // The input list is untouched.
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_same_resources_in_other_slot_succeed() {
        let result = BookingValidator::new().validate(
            &sample_catalog(),
            &committed(),
            &BookingRequest::new("TUE-9", "sub-1", "b-1", "fac-1", "r-101"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_mode_skips_invariant_checks() {
        // fac-1 is not qualified for sub-2; the lenient validator does
        // not care.
        let result = BookingValidator::new().validate(
            &sample_catalog(),
            &committed(),
            &BookingRequest::new("WED-9", "sub-2", "b-2", "fac-1", "r-201"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_strict_rejects_unqualified_faculty() {
        let err = BookingValidator::strict()
            .validate(
                &sample_catalog(),
                &committed(),
                &BookingRequest::new("WED-9", "sub-2", "b-2", "fac-1", "r-201"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::NotQualified);
    }

    #[test]
    fn test_strict_rejects_undersized_room() {
        // r-401 seats 50, b-1 has 58 students.
        let err = BookingValidator::strict()
            .validate(
                &sample_catalog(),
                &[],
                &BookingRequest::new("WED-9", "sub-1", "b-1", "fac-1", "r-401"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::RoomTooSmall);
    }

    #[test]
    fn test_strict_rejects_room_type_mismatch() {
        // sub-2 has lab hours; r-101 is a lecture hall.
        let err = BookingValidator::strict()
            .validate(
                &sample_catalog(),
                &[],
                &BookingRequest::new("WED-9", "sub-2", "b-2", "fac-2", "r-101"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::RoomTypeMismatch);
    }

    #[test]
    fn test_strict_rejects_unknown_reference() {
        let err = BookingValidator::strict()
            .validate(
                &sample_catalog(),
                &[],
                &BookingRequest::new("WED-9", "sub-missing", "b-1", "fac-1", "r-101"),
            )
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::UnknownReference {
                kind: "subject",
                id: "sub-missing".into()
            }
        );
        assert_eq!(err.to_string(), "Unknown subject id: sub-missing");
    }

    #[test]
    fn test_clash_check_runs_before_strict_checks() {
        // Batch clash and qualification problem at once: the clash wins.
        let err = BookingValidator::strict()
            .validate(
                &sample_catalog(),
                &committed(),
                &BookingRequest::new("MON-9", "sub-2", "b-1", "fac-1", "r-101"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::BatchBusy);
    }
}
