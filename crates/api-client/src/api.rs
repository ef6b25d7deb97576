use serde::de::DeserializeOwned;
use shared_types::{
    Agent, AppError, AuthOutcome, AuthResponse, CreatedReport, DocumentMeta, EmployeeDetail, Line,
    Locality, LoginRequest, Operator, ReportPayload, Vehicle, ViolationCode,
};

use crate::config::ApiConfig;
use crate::digest::digest_password;

/// Marker the credential check returns on an accepted login.
const ACCESS_GRANTED: &str = "Acesso permitido";

/// A file handed to the protocol submission: name, content type, bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Operations the protocol backend exposes to this client.
///
/// Everything except `authenticate` carries the service basic-auth
/// credential. Lines and agents are scoped by the operator's service
/// sigla; vehicles, violations, and localities are unscoped lookups.
#[allow(async_fn_in_trait)]
pub trait ProtocolApi {
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthOutcome, AppError>;
    async fn employee_details(&self, user_id: i64) -> Result<Vec<EmployeeDetail>, AppError>;
    async fn operators(&self, date: &str) -> Result<Vec<Operator>, AppError>;
    async fn vehicles(&self) -> Result<Vec<Vehicle>, AppError>;
    async fn lines(&self, service_sigla: &str, date: &str) -> Result<Vec<Line>, AppError>;
    async fn agents(&self, service_sigla: &str) -> Result<Vec<Agent>, AppError>;
    async fn violation_codes(&self) -> Result<Vec<ViolationCode>, AppError>;
    async fn localities(&self) -> Result<Vec<Locality>, AppError>;
    async fn create_report(
        &self,
        reports: Vec<ReportPayload>,
        meta: DocumentMeta,
        file: FileUpload,
    ) -> Result<CreatedReport, AppError>;
    async fn pending_report_count(&self, user_id: i64) -> Result<i64, AppError>;
    async fn dispatch_reports(&self, employee_id: i64) -> Result<(), AppError>;
    async fn update_password(&self, username: &str, new_password: &str) -> Result<(), AppError>;
}

/// reqwest-backed implementation of [`ProtocolApi`].
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        // The browser fetch API owns timeouts on wasm.
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// GET an authenticated endpoint and parse its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .client
            .get(self.url(path))
            .header("Authorization", self.config.basic_auth_header())
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }

}

impl ProtocolApi for HttpApi {
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthOutcome, AppError> {
        let body = LoginRequest {
            username: username.to_string(),
            password_digest: digest_password(password),
        };
        let response = self
            .client
            .post(self.url("/valida-md5/validar"))
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            return Err(classify_status(status, extract_server_message(&text)));
        }

        let parsed: AuthResponse = serde_json::from_str(&text)
            .map_err(|_| AppError::internal("Unexpected response from the login service."))?;
        if parsed.message != ACCESS_GRANTED {
            let reason = parsed
                .detail
                .unwrap_or_else(|| "Invalid username or password.".to_string());
            return Err(AppError::authentication(reason));
        }
        let user_id = parsed
            .user_id
            .ok_or_else(|| AppError::authentication("Login accepted without a user id."))?;
        Ok(AuthOutcome { user_id })
    }

    async fn employee_details(&self, user_id: i64) -> Result<Vec<EmployeeDetail>, AppError> {
        self.get_json(&format!("/funcionario/{user_id}")).await
    }

    async fn operators(&self, date: &str) -> Result<Vec<Operator>, AppError> {
        self.get_json(&format!("/operadoras/{date}")).await
    }

    async fn vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        self.get_json("/veiculo").await
    }

    async fn lines(&self, service_sigla: &str, date: &str) -> Result<Vec<Line>, AppError> {
        self.get_json(&format!("/linhas/{service_sigla}/{date}")).await
    }

    async fn agents(&self, service_sigla: &str) -> Result<Vec<Agent>, AppError> {
        self.get_json(&format!("/preposto/{service_sigla}")).await
    }

    async fn violation_codes(&self) -> Result<Vec<ViolationCode>, AppError> {
        self.get_json("/infracao").await
    }

    async fn localities(&self) -> Result<Vec<Locality>, AppError> {
        self.get_json("/localidades").await
    }

    async fn create_report(
        &self,
        reports: Vec<ReportPayload>,
        meta: DocumentMeta,
        file: FileUpload,
    ) -> Result<CreatedReport, AppError> {
        let documento = serde_json::to_string(&meta)
            .map_err(|e| AppError::internal(format!("Could not encode document meta: {e}")))?;
        let pre_autos = serde_json::to_string(&reports)
            .map_err(|e| AppError::internal(format!("Could not encode report payload: {e}")))?;

        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.content_type)
            .map_err(|e| AppError::internal(format!("Invalid attachment content type: {e}")))?;
        let form = reqwest::multipart::Form::new()
            .text("documento", documento)
            .text("preAutos", pre_autos)
            .part("arquivo", part);

        let response = self
            .client
            .post(self.url("/criar/autos"))
            .header("Authorization", self.config.basic_auth_header())
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            let message = extract_server_message(&text)
                .unwrap_or_else(|| "The report could not be submitted. Try again.".to_string());
            tracing::warn!(status, "protocol submission rejected");
            return Err(AppError::submission(message));
        }

        serde_json::from_str(&text)
            .map_err(|_| AppError::submission("The server did not return a report number."))
    }

    async fn pending_report_count(&self, user_id: i64) -> Result<i64, AppError> {
        let value: serde_json::Value = self
            .get_json(&format!("/funcionario/preautos/{user_id}"))
            .await?;
        // The count arrives either bare or wrapped; anything else reads as zero.
        Ok(value
            .as_i64()
            .or_else(|| value.get("quantidade").and_then(|v| v.as_i64()))
            .unwrap_or(0))
    }

    async fn dispatch_reports(&self, employee_id: i64) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.url(&format!("/criar/autos/enviar/{employee_id}")))
            .header("Authorization", self.config.basic_auth_header())
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(classify_status(status, extract_server_message(&text)))
        }
    }

    async fn update_password(&self, username: &str, new_password: &str) -> Result<(), AppError> {
        let body = serde_json::json!({
            "username": username,
            "novaSenha": digest_password(new_password),
        });
        let response = self
            .client
            .put(self.url("/valida-md5/update"))
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(classify_status(status, extract_server_message(&text)))
        }
    }
}

/// Map a reqwest transport failure onto the error taxonomy.
fn map_transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::timeout("The connection timed out. Check your network.")
    } else {
        tracing::warn!(error = %err, "request failed before a response arrived");
        AppError::network("Connection error. Check your internet connection.")
    }
}

/// Map a non-success HTTP status onto the error taxonomy, preferring the
/// server-provided message when one was parseable.
fn classify_status(status: u16, server_message: Option<String>) -> AppError {
    match status {
        401 => AppError::authentication("Invalid username or password."),
        403 => AppError::forbidden("Access not allowed. Contact the administrator."),
        _ => {
            let message =
                server_message.unwrap_or_else(|| format!("Server error: {status}"));
            AppError::internal(message)
        }
    }
}

/// Pull the `message` field out of an error body, if the body is JSON.
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(classify_status(status, extract_server_message(&text)));
    }
    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!(error = %e, "response body did not match the expected shape");
        AppError::internal("Unexpected response from the server.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn classify_maps_auth_statuses() {
        assert_eq!(classify_status(401, None).kind, AppErrorKind::Authentication);
        assert_eq!(classify_status(403, None).kind, AppErrorKind::Forbidden);
    }

    #[test]
    fn classify_prefers_server_message() {
        let err = classify_status(500, Some("queue offline".into()));
        assert_eq!(err.kind, AppErrorKind::Internal);
        assert_eq!(err.message, "queue offline");
    }

    #[test]
    fn classify_falls_back_to_status_text() {
        let err = classify_status(502, None);
        assert_eq!(err.message, "Server error: 502");
    }

    #[test]
    fn extract_server_message_requires_json() {
        assert_eq!(
            extract_server_message(r#"{"message":"nope"}"#).as_deref(),
            Some("nope")
        );
        assert!(extract_server_message("<html>bad gateway</html>").is_none());
    }
}
