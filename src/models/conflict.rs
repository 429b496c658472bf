//! Conflict records and the run-scoped reporter.
//!
//! A conflict is a session-request the allocator could not satisfy,
//! carrying enough context (`conflict_type`, `description`, `severity`)
//! for a caller to render it without re-deriving anything.
//!
//! # Taxonomy
//! - `CAPACITY_MISMATCH` (HIGH): no instructor in the catalog is
//!   qualified for a required subject. A data-modeling problem; fix the
//!   catalog, not the run.
//! - `ROOM_DOUBLE_BOOKING` (MEDIUM): a qualified instructor exists but no
//!   slot/faculty/room combination satisfies every constraint. May be
//!   resolvable by adding rooms or slots, or rebalancing batches.

use serde::{Deserialize, Serialize};

/// How serious a conflict is for the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    High,
    Medium,
}

/// Classification of allocation conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictType {
    /// No qualified instructor exists for the subject.
    CapacityMismatch,
    /// No viable slot/faculty/room combination was found.
    RoomDoubleBooking,
}

/// An unsatisfiable session-request, with a machine-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Unique conflict identifier, derived from the request id.
    pub id: String,
    /// Conflict classification.
    pub conflict_type: ConflictType,
    /// Human-readable description.
    pub description: String,
    /// Severity for operator triage.
    pub severity: Severity,
}

impl Conflict {
    /// Creates a HIGH-severity conflict for a subject no instructor can
    /// teach. No slot search was attempted for the request.
    pub fn capacity_mismatch(request_id: &str, description: impl Into<String>) -> Self {
        Self {
            id: format!("conf-{request_id}"),
            conflict_type: ConflictType::CapacityMismatch,
            description: description.into(),
            severity: Severity::High,
        }
    }

    /// Creates a MEDIUM-severity conflict for a request that exhausted
    /// every slot without finding a free faculty/room combination.
    pub fn unassignable(request_id: &str, description: impl Into<String>) -> Self {
        Self {
            id: format!("unassigned-{request_id}"),
            conflict_type: ConflictType::RoomDoubleBooking,
            description: description.into(),
            severity: Severity::Medium,
        }
    }
}

/// Append-only collector for one allocation run.
///
/// Conflicts are immutable once recorded; their order follows the
/// allocator's sorted request order.
#[derive(Debug, Default)]
pub struct ConflictReporter {
    conflicts: Vec<Conflict>,
}

impl ConflictReporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a conflict.
    pub fn record(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    /// Number of conflicts recorded so far.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Whether no conflicts have been recorded.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Consumes the reporter, yielding conflicts in record order.
    pub fn into_conflicts(self) -> Vec<Conflict> {
        self.conflicts
    }
}
