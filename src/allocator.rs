//! Greedy timetable allocation.
//!
//! # Algorithm
//!
//! A deterministic single-pass first-fit heuristic with no backtracking:
//!
//! 1. Expand the catalog into session-requests ([`crate::demand`]).
//! 2. Sort requests: labs before lectures (harder to fit), then larger
//!    batches first; ties keep demand order (stable sort).
//! 3. Sort slots hour-major: `period_index` ascending, then day
//!    ascending. Filling Mon-9, Tue-9, Wed-9 ... before Mon-10 spreads a
//!    subject's sessions across different weekdays instead of packing a
//!    single day.
//! 4. For each request, commit the first free (slot, faculty, room)
//!    triple; otherwise record a conflict and move on.
//!
//! The run never aborts: every request ends up as exactly one committed
//! entry or one conflict.
//!
//! # Complexity
//! O(requests x slots x faculty x rooms); all four sets are small (tens
//! to low hundreds) at the intended scale.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use crate::demand::expand_demand;
use crate::models::{Catalog, Conflict, ConflictReporter, ScheduleEntry, Slot, Timetable};
use crate::occupancy::{OccupancyKind, OccupancyTracker};

/// A timetable allocation strategy.
///
/// The shipped implementation is the greedy first-fit pass; alternative
/// strategies (an optimizer, say) plug in behind the same seam without
/// touching callers.
pub trait Allocator {
    /// Produces a timetable covering every session-request in the
    /// catalog exactly once, as either a committed entry or a conflict.
    fn allocate(&self, catalog: &Catalog) -> Timetable;
}

/// Deterministic first-fit allocator.
///
/// Re-running on an unchanged catalog reproduces an identical timetable:
/// there is no randomness, and every iteration order is fixed by the
/// catalog and the sort policy above.
///
/// # Example
///
/// ```
/// use timegrid::allocator::{Allocator, GreedyAllocator};
/// use timegrid::models::{Batch, Catalog, Faculty, Room, RoomType, Slot, Subject};
///
/// let catalog = Catalog::new()
///     .with_subject(Subject::new("sub-1", "CS101", "Intro to Programming").with_lecture_hours(1))
///     .with_faculty(Faculty::new("fac-1", "Dr. Alan Turing").with_expertise("sub-1"))
///     .with_room(Room::new("r-101", "Hall 101", 65, RoomType::Lecture))
///     .with_batch(Batch::new("b-1", "Year 1", 58).with_subject("sub-1"))
///     .with_slots(Slot::standard_week());
///
/// let timetable = GreedyAllocator::new().allocate(&catalog);
/// assert_eq!(timetable.entry_count(), 1);
/// assert!(timetable.is_feasible());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    /// Creates a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Slots in first-fit search order: hour-major, Monday first.
    fn sorted_slots(catalog: &Catalog) -> Vec<&Slot> {
        let mut slots: Vec<&Slot> = catalog.slots.iter().collect();
        slots.sort_by(|a, b| a.period_index.cmp(&b.period_index).then(a.day.cmp(&b.day)));
        slots
    }
}

impl Allocator for GreedyAllocator {
    fn allocate(&self, catalog: &Catalog) -> Timetable {
        let mut requests = expand_demand(catalog);

        // Labs first, then larger batches; stable, so equal keys keep
        // the batch/subject/occurrence expansion order.
        requests.sort_by(|a, b| {
            b.session_type
                .is_lab()
                .cmp(&a.session_type.is_lab())
                .then(b.batch.size.cmp(&a.batch.size))
        });

        let slot_order = Self::sorted_slots(catalog);
        let mut tracker = OccupancyTracker::new();
        let mut reporter = ConflictReporter::new();
        let mut timetable = Timetable::new();

        for request in &requests {
            let eligible_faculty = catalog.qualified_faculty(&request.subject.id);
            if eligible_faculty.is_empty() {
                reporter.record(Conflict::capacity_mismatch(
                    &request.id,
                    format!(
                        "No faculty found for {} ({})",
                        request.subject.name, request.session_type
                    ),
                ));
                continue;
            }

            let eligible_rooms = catalog.eligible_rooms(request.batch.size, request.session_type);

            let mut committed = false;
            'slots: for slot in &slot_order {
                if tracker.is_busy(OccupancyKind::Batch, &slot.id, &request.batch.id) {
                    continue;
                }
                for faculty in &eligible_faculty {
                    if tracker.is_busy(OccupancyKind::Faculty, &slot.id, &faculty.id) {
                        continue;
                    }
                    for room in &eligible_rooms {
                        if tracker.is_busy(OccupancyKind::Room, &slot.id, &room.id) {
                            continue;
                        }

                        tracker.mark_busy(OccupancyKind::Batch, &slot.id, &request.batch.id, &request.id);
                        tracker.mark_busy(OccupancyKind::Faculty, &slot.id, &faculty.id, &request.id);
                        tracker.mark_busy(OccupancyKind::Room, &slot.id, &room.id, &request.id);

                        timetable.add_entry(ScheduleEntry::new(
                            format!("entry-{}", request.id),
                            &slot.id,
                            &request.subject.id,
                            &faculty.id,
                            &room.id,
                            &request.batch.id,
                        ));
                        committed = true;
                        break 'slots;
                    }
                }
            }

            if !committed {
                reporter.record(Conflict::unassignable(
                    &request.id,
                    format!(
                        "Could not find slot/room for {} - {} ({})",
                        request.batch.name, request.subject.code, request.session_type
                    ),
                ));
            }
        }

        timetable.conflicts = reporter.into_conflicts();
        tracing::debug!(
            entries = timetable.entries.len(),
            conflicts = timetable.conflicts.len(),
            "allocation run complete"
        );
        timetable
    }
}
