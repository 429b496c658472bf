//! Catalog integrity checks.
//!
//! Checks structural integrity of a catalog before a generation run.
//! Detects:
//! - Duplicate IDs within each collection
//! - Batch curricula referencing unknown subjects
//! - Faculty expertise referencing unknown subjects
//! - Batches with no subjects
//!
//! The engine itself stays lenient (dangling references are skipped with
//! a warning during demand expansion); this pass is for callers that
//! want such catalogs rejected at ingestion time instead.

use crate::models::Catalog;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities in one collection share the same ID.
    DuplicateId,
    /// A batch or faculty references a subject that doesn't exist.
    UnknownSubjectReference,
    /// A batch has no subjects to schedule.
    EmptyBatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog's structural integrity.
///
/// Checks:
/// 1. No duplicate subject, faculty, room, batch, or slot IDs
/// 2. Every batch has at least one subject
/// 3. Every subject id referenced by a batch resolves
/// 4. Every subject id in a faculty expertise list resolves
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    for s in &catalog.subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    for f in &catalog.faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &catalog.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut batch_ids = HashSet::new();
    for b in &catalog.batches {
        if !batch_ids.insert(b.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate batch ID: {}", b.id),
            ));
        }

        if b.subjects.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyBatch,
                format!("Batch '{}' has no subjects", b.id),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    for s in &catalog.slots {
        if !slot_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot ID: {}", s.id),
            ));
        }
    }

    // Check subject references from batches and faculty expertise.
    for b in &catalog.batches {
        for sub in &b.subjects {
            if !subject_ids.contains(sub.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubjectReference,
                    format!("Batch '{}' references unknown subject '{sub}'", b.id),
                ));
            }
        }
    }
    for f in &catalog.faculty {
        for sub in &f.expertise {
            if !subject_ids.contains(sub.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubjectReference,
                    format!("Faculty '{}' expertise references unknown subject '{sub}'", f.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
