//! Curriculum timetable allocation engine.
//!
//! Assigns curriculum-driven teaching sessions to (slot, faculty, room)
//! triples under hard resource constraints: no batch, instructor, or
//! room is ever double-booked, instructors only teach subjects in their
//! expertise, and rooms must match the session's size and lab/lecture
//! type.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Slot`, `Subject`, `Faculty`, `Room`,
//!   `Batch`, `Catalog`, `ScheduleEntry`, `Timetable`, `Conflict`
//! - **`demand`**: Expands a catalog into atomic session-requests
//! - **`occupancy`**: Run-scoped busy/free bookkeeping
//! - **`allocator`**: The greedy first-fit allocation pass
//! - **`booking`**: Single-entry interactive booking validation
//! - **`validation`**: Catalog integrity checks (duplicate/dangling ids)
//! - **`stats`**: Dashboard metrics over a committed timetable
//!
//! # Architecture
//!
//! The engine is a pure value computation: a [`models::Catalog`]
//! snapshot goes in, a [`models::Timetable`] (committed entries plus an
//! itemized conflict list) comes out. Persistence, rendering, import and
//! export belong to the surrounding application. The allocator is a
//! deterministic greedy heuristic: its contract is constraint
//! satisfaction, not optimality, and re-running on unchanged input
//! reproduces an identical schedule.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Carter & Laporte (1998), "Recent Developments in Practical Course
//!   Timetabling"

pub mod allocator;
pub mod booking;
pub mod demand;
pub mod models;
pub mod occupancy;
pub mod stats;
pub mod validation;
