use api_client::FileUpload;
use app::storage::DraftStore;
use app::submission::{save_draft, submit, validate_for_submit};
use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, ReportStatus, ViolationReport};

use crate::common::{sample_user, MockApi};

fn complete_report() -> ViolationReport {
    let mut report = ViolationReport::new("2025-10-03".into(), "14:30".into());
    report.operator_id = 1;
    report.operator_sigla = "VC".into();
    report.operator_name = "Viacao Central".into();
    report.vehicle_id = 7;
    report.plate = "ABC1D23".into();
    report.model = "MB O-500".into();
    report.line_id = 31;
    report.line_code = "0.130".into();
    report.locality_id = 2;
    report.violation_id = 5;
    report.location = "Terminal Rodoviario".into();
    report
}

fn upload() -> FileUpload {
    FileUpload {
        name: "foto.jpg".into(),
        content_type: "image/jpeg".into(),
        bytes: vec![0xff, 0xd8],
    }
}

#[tokio::test]
async fn submit_with_missing_violation_makes_no_network_call() {
    let api = MockApi::default();
    let store = DraftStore::in_memory();
    let mut report = complete_report();
    report.violation_id = 0;

    let err = submit(
        &api,
        &store,
        &sample_user(),
        &mut report,
        vec!["foto.jpg".into()],
        Some(upload()),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field_errors.contains_key("violation_id"));
    assert_eq!(api.create_calls.get(), 0);
    assert_eq!(report.status, ReportStatus::Draft);
    assert!(store.get(report.id).is_none());
}

#[tokio::test]
async fn submit_without_an_attachment_is_rejected_before_io() {
    let api = MockApi::default();
    let store = DraftStore::in_memory();
    let mut report = complete_report();

    let err = submit(&api, &store, &sample_user(), &mut report, Vec::new(), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field_errors.contains_key("attachment"));
    assert_eq!(api.create_calls.get(), 0);
}

#[tokio::test]
async fn successful_submit_adopts_the_assigned_number_and_persists() {
    let api = MockApi::default();
    let store = DraftStore::in_memory();
    let mut report = complete_report();

    let outcome = submit(
        &api,
        &store,
        &sample_user(),
        &mut report,
        vec!["foto.jpg".into()],
        Some(upload()),
    )
    .await
    .unwrap();

    assert_eq!(outcome.assigned_number, "2025099");
    assert_eq!(report.status, ReportStatus::Submitted);
    assert_eq!(report.number.as_deref(), Some("2025099"));

    let stored = store.get(report.id).unwrap();
    assert_eq!(stored.status, ReportStatus::Submitted);
    assert_eq!(stored.number.as_deref(), Some("2025099"));
    assert_eq!(stored.attachment_names, vec!["foto.jpg".to_string()]);
    assert_eq!(api.create_calls.get(), 1);
}

#[tokio::test]
async fn the_payload_is_batch_shaped_with_the_denormalized_fields() {
    let api = MockApi::default();
    let store = DraftStore::in_memory();
    let mut report = complete_report();

    submit(
        &api,
        &store,
        &sample_user(),
        &mut report,
        vec!["foto.jpg".into()],
        Some(upload()),
    )
    .await
    .unwrap();

    let captured = api.last_submission.borrow();
    let (payloads, meta, file) = captured.as_ref().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].permission_id, 1);
    assert_eq!(payloads[0].vehicle_id, 7);
    assert_eq!(payloads[0].plate, "ABC1D23");
    assert_eq!(payloads[0].line_code, "0.130");
    assert_eq!(payloads[0].employee_id, 88);
    assert_eq!(meta.user_id, 1560);
    assert_eq!(meta.web_user, "jinspetor");
    assert_eq!(file.name, "foto.jpg");
}

#[tokio::test]
async fn a_rejected_submit_leaves_local_state_untouched() {
    let api = MockApi::default().fail_create(AppError::submission("queue offline"));
    let store = DraftStore::in_memory();
    let mut report = complete_report();
    save_draft(&store, &mut report, vec!["foto.jpg".into()]).unwrap();

    let err = submit(
        &api,
        &store,
        &sample_user(),
        &mut report,
        vec!["foto.jpg".into()],
        Some(upload()),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Submission);
    assert_eq!(err.message, "queue offline");
    assert_eq!(report.status, ReportStatus::Draft);
    assert!(report.number.is_none());
    let stored = store.get(report.id).unwrap();
    assert_eq!(stored.status, ReportStatus::Draft);
}

#[test]
fn save_draft_roundtrips_through_the_store() {
    let store = DraftStore::in_memory();
    let mut report = complete_report();

    save_draft(
        &store,
        &mut report,
        vec!["foto.jpg".into(), "laudo.pdf".into()],
    )
    .unwrap();

    let stored = store.get(report.id).unwrap();
    assert_eq!(stored.status, ReportStatus::Draft);
    assert_eq!(
        stored.attachment_names,
        vec!["foto.jpg".to_string(), "laudo.pdf".to_string()]
    );
    assert_eq!(stored.plate, "ABC1D23");
}

#[test]
fn validate_for_submit_lists_every_missing_field_at_once() {
    let report = ViolationReport::new("2025-10-03".into(), "14:30".into());
    let err = validate_for_submit(&report, 0).unwrap_err();

    for field in [
        "operator_id",
        "vehicle_id",
        "line_id",
        "locality_id",
        "violation_id",
        "attachment",
    ] {
        assert!(err.field_errors.contains_key(field), "missing {field}");
    }
}
