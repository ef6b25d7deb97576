use app::auth::sign_in_flow;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::MockApi;

#[tokio::test]
async fn sign_in_builds_the_session_from_the_first_employee_row() {
    let api = MockApi::default();
    let user = sign_in_flow(&api, "jinspetor", "s3cr3t").await.unwrap();

    assert_eq!(user.user_id, 1560);
    assert_eq!(user.employee_id, 88);
    assert_eq!(user.full_name, "Jose Inspetor");
    assert_eq!(user.username, "jinspetor");
}

#[tokio::test]
async fn rejected_credentials_surface_as_authentication_errors() {
    let api = MockApi {
        auth_user_id: None,
        ..MockApi::default()
    };
    let err = sign_in_flow(&api, "jinspetor", "wrong").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Authentication);
}

#[tokio::test]
async fn a_missing_employee_record_is_an_error() {
    let api = MockApi {
        employee_rows: Vec::new(),
        ..MockApi::default()
    };
    let err = sign_in_flow(&api, "jinspetor", "s3cr3t").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Authentication);
}
