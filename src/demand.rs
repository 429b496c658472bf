//! Session demand expansion.
//!
//! Expands a catalog into the ordered list of atomic session-requests the
//! allocator consumes: one request per required lecture or lab hour per
//! (batch, subject) pair.
//!
//! # Ordering
//! Requests are emitted in batch, then curriculum-subject, then
//! occurrence order, with a subject's lectures before its labs. The
//! allocator applies its own priority sort on top; the expansion order is
//! the stable-sort tiebreak.
//!
//! # Dangling references
//! A subject id on a batch that resolves to no catalog subject is
//! skipped with a warning, not treated as an error. Run
//! [`crate::validation::validate_catalog`] beforehand to reject such
//! catalogs outright.

use crate::models::{Batch, Catalog, SessionType, Subject};

/// One required hour of teaching awaiting assignment.
///
/// Carries resolved copies of its subject and batch so the allocator
/// never re-resolves ids mid-run.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    /// Stable derived id: `{batch}-{subject}-{LEC|LAB}-{occurrence}`.
    pub id: String,
    /// The subject being taught.
    pub subject: Subject,
    /// The attending batch.
    pub batch: Batch,
    /// Lecture or lab.
    pub session_type: SessionType,
}

impl SessionRequest {
    fn new(batch: &Batch, subject: &Subject, session_type: SessionType, occurrence: u32) -> Self {
        Self {
            id: format!(
                "{}-{}-{}-{occurrence}",
                batch.id,
                subject.id,
                session_type.code()
            ),
            subject: subject.clone(),
            batch: batch.clone(),
            session_type,
        }
    }
}

/// Expands the catalog into the ordered session-request list.
///
/// For every subject in every batch's curriculum, emits one request per
/// required lecture hour, then one per required lab hour.
pub fn expand_demand(catalog: &Catalog) -> Vec<SessionRequest> {
    let mut requests = Vec::new();

    for batch in &catalog.batches {
        for subject_id in &batch.subjects {
            let Some(subject) = catalog.subject(subject_id) else {
                tracing::warn!(
                    batch = %batch.id,
                    subject = %subject_id,
                    "skipping unresolved subject reference in batch curriculum"
                );
                continue;
            };

            for i in 0..subject.lecture_hours {
                requests.push(SessionRequest::new(batch, subject, SessionType::Lecture, i));
            }
            for i in 0..subject.lab_hours {
                requests.push(SessionRequest::new(batch, subject, SessionType::Lab, i));
            }
        }
    }

    tracing::debug!(requests = requests.len(), "expanded session demand");
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Batch, Catalog, Subject};

    fn catalog_with(subjects: Vec<Subject>, batches: Vec<Batch>) -> Catalog {
        let mut catalog = Catalog::new();
        for s in subjects {
            catalog = catalog.with_subject(s);
        }
        for b in batches {
            catalog = catalog.with_batch(b);
        }
        catalog
    }

    #[test]
    fn test_expansion_order_and_ids() {
        let catalog = catalog_with(
            vec![
                Subject::new("sub-1", "CS101", "Intro to Programming")
                    .with_lecture_hours(2)
                    .with_lab_hours(1),
                Subject::new("sub-2", "MA101", "Calculus I").with_lecture_hours(1),
            ],
            vec![Batch::new("b-1", "Year 1", 58)
                .with_subject("sub-1")
                .with_subject("sub-2")],
        );

        let requests = expand_demand(&catalog);
        let ids: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "b-1-sub-1-LEC-0",
                "b-1-sub-1-LEC-1",
                "b-1-sub-1-LAB-0",
                "b-1-sub-2-LEC-0",
            ]
        );
        assert_eq!(requests[2].session_type, SessionType::Lab);
        assert_eq!(requests[2].subject.code, "CS101");
        assert_eq!(requests[2].batch.id, "b-1");
    }

    #[test]
    fn test_batch_order_before_subject_order() {
        let subject = Subject::new("sub-1", "CS101", "Intro").with_lecture_hours(1);
        let catalog = catalog_with(
            vec![subject],
            vec![
                Batch::new("b-1", "Year 1", 58).with_subject("sub-1"),
                Batch::new("b-2", "Year 2", 55).with_subject("sub-1"),
            ],
        );

        let requests = expand_demand(&catalog);
        assert_eq!(requests[0].id, "b-1-sub-1-LEC-0");
        assert_eq!(requests[1].id, "b-2-sub-1-LEC-0");
    }

    #[test]
    fn test_dangling_subject_reference_is_skipped() {
        let catalog = catalog_with(
            vec![Subject::new("sub-1", "CS101", "Intro").with_lecture_hours(1)],
            vec![Batch::new("b-1", "Year 1", 58)
                .with_subject("sub-missing")
                .with_subject("sub-1")],
        );

        let requests = expand_demand(&catalog);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, "b-1-sub-1-LEC-0");
    }

    #[test]
    fn test_zero_hour_subject_produces_no_requests() {
        let catalog = catalog_with(
            vec![Subject::new("sub-1", "XX000", "Placeholder")],
            vec![Batch::new("b-1", "Year 1", 58).with_subject("sub-1")],
        );
        assert!(expand_demand(&catalog).is_empty());
    }

    #[test]
    fn test_lab_only_subject() {
        let catalog = catalog_with(
            vec![Subject::new("sub-1", "CS499", "Capstone Project").with_lab_hours(2)],
            vec![Batch::new("b-4", "Year 4", 42).with_subject("sub-1")],
        );

        let requests = expand_demand(&catalog);
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.session_type == SessionType::Lab));
        assert_eq!(requests[1].id, "b-4-sub-1-LAB-1");
    }
}
