//! Per-run occupancy tracking.
//!
//! Three independent presence maps, keyed by (slot, batch), (slot,
//! faculty), and (slot, room): the single source of truth for "is X busy
//! in slot Y" during one allocation run.
//!
//! A tracker is owned exclusively by one allocator invocation and
//! discarded with it. There is no removal: the engine never un-commits
//! within a run, so a key, once marked, stays busy.

use std::collections::HashMap;

/// Which resource dimension an occupancy key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyKind {
    Batch,
    Faculty,
    Room,
}

/// Run-scoped busy/free state for batches, faculty, and rooms.
#[derive(Debug, Default)]
pub struct OccupancyTracker {
    batches: HashMap<(String, String), String>,
    faculty: HashMap<(String, String), String>,
    rooms: HashMap<(String, String), String>,
}

impl OccupancyTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: OccupancyKind) -> &HashMap<(String, String), String> {
        match kind {
            OccupancyKind::Batch => &self.batches,
            OccupancyKind::Faculty => &self.faculty,
            OccupancyKind::Room => &self.rooms,
        }
    }

    /// Marks `entity_id` busy in `slot_id`, owned by `request_id`.
    ///
    /// Called exactly once per committed entry per kind.
    pub fn mark_busy(
        &mut self,
        kind: OccupancyKind,
        slot_id: &str,
        entity_id: &str,
        request_id: &str,
    ) {
        let map = match kind {
            OccupancyKind::Batch => &mut self.batches,
            OccupancyKind::Faculty => &mut self.faculty,
            OccupancyKind::Room => &mut self.rooms,
        };
        map.insert(
            (slot_id.to_string(), entity_id.to_string()),
            request_id.to_string(),
        );
    }

    /// Whether `entity_id` is busy in `slot_id`.
    pub fn is_busy(&self, kind: OccupancyKind, slot_id: &str, entity_id: &str) -> bool {
        self.map(kind)
            .contains_key(&(slot_id.to_string(), entity_id.to_string()))
    }

    /// The request occupying `(slot_id, entity_id)`, if any.
    pub fn occupant(&self, kind: OccupancyKind, slot_id: &str, entity_id: &str) -> Option<&str> {
        self.map(kind)
            .get(&(slot_id.to_string(), entity_id.to_string()))
            .map(String::as_str)
    }
}
