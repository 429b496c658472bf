//! Schedule statistics.
//!
//! Computes the overview metrics a dashboard renders from a committed
//! timetable: session counts, room utilization, per-subject and
//! per-room-type distributions, and per-instructor load against the
//! advisory `max_load` cap.

use std::collections::{HashMap, HashSet};

use crate::models::{Catalog, RoomType, Timetable};

/// Aggregate metrics over a committed timetable.
#[derive(Debug, Clone)]
pub struct TimetableStats {
    /// Committed session count.
    pub total_sessions: usize,
    /// Fraction of rooms hosting at least one session (0.0..1.0).
    pub room_utilization: f64,
    /// Session count per subject code.
    pub sessions_by_subject: HashMap<String, usize>,
    /// Session count per room type.
    pub sessions_by_room_type: HashMap<RoomType, usize>,
    /// Committed weekly hours per faculty id.
    pub faculty_load: HashMap<String, usize>,
    /// Faculty ids scheduled past their advisory `max_load`.
    pub overloaded_faculty: Vec<String>,
    /// Unsatisfied session-request count.
    pub conflict_count: usize,
}

impl TimetableStats {
    /// Computes stats from a timetable and its catalog.
    ///
    /// Entries referencing ids missing from the catalog still count
    /// toward totals and loads; they are simply absent from the
    /// subject/room-type distributions.
    pub fn calculate(timetable: &Timetable, catalog: &Catalog) -> Self {
        let total_sessions = timetable.entries.len();

        let active_rooms: HashSet<&str> = timetable
            .entries
            .iter()
            .map(|e| e.room_id.as_str())
            .collect();
        let room_utilization = if catalog.rooms.is_empty() {
            0.0
        } else {
            active_rooms.len() as f64 / catalog.rooms.len() as f64
        };

        let mut sessions_by_subject: HashMap<String, usize> = HashMap::new();
        let mut sessions_by_room_type: HashMap<RoomType, usize> = HashMap::new();
        let mut faculty_load: HashMap<String, usize> = HashMap::new();

        for entry in &timetable.entries {
            if let Some(subject) = catalog.subject(&entry.subject_id) {
                *sessions_by_subject.entry(subject.code.clone()).or_insert(0) += 1;
            }
            if let Some(room) = catalog.room(&entry.room_id) {
                *sessions_by_room_type.entry(room.room_type).or_insert(0) += 1;
            }
            *faculty_load.entry(entry.faculty_id.clone()).or_insert(0) += 1;
        }

        let mut overloaded_faculty: Vec<String> = catalog
            .faculty
            .iter()
            .filter(|f| {
                faculty_load
                    .get(&f.id)
                    .is_some_and(|&load| load > f.max_load as usize)
            })
            .map(|f| f.id.clone())
            .collect();
        overloaded_faculty.sort();

        Self {
            total_sessions,
            room_utilization,
            sessions_by_subject,
            sessions_by_room_type,
            faculty_load,
            overloaded_faculty,
            conflict_count: timetable.conflicts.len(),
        }
    }
}
