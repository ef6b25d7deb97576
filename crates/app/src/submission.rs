//! Save-draft and remote-submit orchestration.
//!
//! `save_draft` touches only the local store. `submit` validates first,
//! raises before any I/O on a miss, and mutates local state only after the
//! backend accepted the report; a failed call leaves the draft exactly as
//! it was.

use std::collections::HashMap;

use api_client::{FileUpload, ProtocolApi};
use shared_types::{
    AppError, DocumentMeta, ReportPayload, ReportStatus, SessionUser, ViolationReport,
};
use validator::Validate;

use crate::storage::DraftStore;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub assigned_number: String,
}

const ATTACHMENT_RULE: &str = "Attach exactly one file before submitting.";

/// Check every submit precondition without touching the network: the
/// required reference ids, the date, and the one-attachment policy.
/// The error names every missing field.
pub fn validate_for_submit(
    report: &ViolationReport,
    attachment_count: usize,
) -> Result<(), AppError> {
    let mut field_errors = match report.validate() {
        Ok(()) => HashMap::new(),
        Err(errors) => AppError::from(errors).field_errors,
    };
    if attachment_count != 1 {
        field_errors.insert("attachment".to_string(), ATTACHMENT_RULE.to_string());
    }
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Required fields are missing", field_errors))
    }
}

/// Persist the report locally as a draft, snapshotting the current
/// attachment filenames. Store failure is fatal for the operation and
/// surfaced to the caller; nothing retries automatically.
pub fn save_draft(
    store: &DraftStore,
    report: &mut ViolationReport,
    attachment_names: Vec<String>,
) -> Result<(), AppError> {
    report.attachment_names = attachment_names;
    report.status = ReportStatus::Draft;
    store.upsert(report)
}

/// Protocol the report with the backend.
///
/// On success the report adopts the server-assigned number, flips to
/// `Submitted`, and is persisted so the local record reflects the
/// protocoled state. On any failure local state is untouched.
pub async fn submit<A: ProtocolApi>(
    api: &A,
    store: &DraftStore,
    session: &SessionUser,
    report: &mut ViolationReport,
    attachment_names: Vec<String>,
    upload: Option<FileUpload>,
) -> Result<SubmitOutcome, AppError> {
    validate_for_submit(report, attachment_names.len())?;
    let upload = upload.ok_or_else(|| {
        let mut fields = HashMap::new();
        fields.insert("attachment".to_string(), ATTACHMENT_RULE.to_string());
        AppError::validation("Required fields are missing", fields)
    })?;

    let payload = ReportPayload::from_report(report, session);
    let meta = DocumentMeta::from_session(session);
    let created = api.create_report(vec![payload], meta, upload).await?;

    report.status = ReportStatus::Submitted;
    report.number = Some(created.assigned_number.clone());
    report.attachment_names = attachment_names;
    store.upsert(report)?;
    tracing::info!(number = %created.assigned_number, "report protocoled");

    Ok(SubmitOutcome {
        assigned_number: created.assigned_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_report() -> ViolationReport {
        let mut report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        report.operator_id = 1;
        report.vehicle_id = 7;
        report.line_id = 31;
        report.locality_id = 2;
        report.violation_id = 5;
        report
    }

    #[test]
    fn validation_passes_with_one_attachment() {
        assert!(validate_for_submit(&complete_report(), 1).is_ok());
    }

    #[test]
    fn validation_names_the_attachment_rule() {
        let err = validate_for_submit(&complete_report(), 0).unwrap_err();
        assert!(err.field_errors.contains_key("attachment"));

        let err = validate_for_submit(&complete_report(), 2).unwrap_err();
        assert!(err.field_errors.contains_key("attachment"));
    }

    #[test]
    fn validation_collects_missing_references_and_attachment_together() {
        let report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        let err = validate_for_submit(&report, 0).unwrap_err();
        for field in ["operator_id", "vehicle_id", "line_id", "locality_id", "violation_id", "attachment"] {
            assert!(err.field_errors.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn save_draft_snapshots_names_and_forces_draft() {
        let store = DraftStore::in_memory();
        let mut report = complete_report();
        report.status = ReportStatus::Submitted;

        save_draft(&store, &mut report, vec!["foto.jpg".into()]).unwrap();

        let stored = store.get(report.id).unwrap();
        assert_eq!(stored.status, ReportStatus::Draft);
        assert_eq!(stored.attachment_names, vec!["foto.jpg".to_string()]);
    }
}
