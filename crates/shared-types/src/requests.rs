//! Wire payloads for the protocol backend. Field names are the backend's
//! and are fixed; everything here is serialized exactly as the service
//! expects it.

use serde::{Deserialize, Serialize};

use crate::report::ViolationReport;
use crate::session::SessionUser;

/// Body of the login call. The password is already digested.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(rename = "senha")]
    pub password_digest: String,
}

/// Raw login response. `mensagem` carries the accepted-access marker.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "mensagem", default)]
    pub message: String,
    #[serde(rename = "id_usuario", default)]
    pub user_id: Option<i64>,
    /// Rejection detail some error responses carry instead of `mensagem`.
    #[serde(rename = "message", default)]
    pub detail: Option<String>,
}

/// Successful authentication, reduced to what the session needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub user_id: i64,
}

/// One report in the batch-shaped protocol submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    #[serde(rename = "idFuncionario")]
    pub employee_id: i64,
    #[serde(rename = "idPermissao")]
    pub permission_id: i64,
    #[serde(rename = "idInfracao")]
    pub violation_id: i64,
    #[serde(rename = "dataAutuacao")]
    pub date: String,
    #[serde(rename = "horaAutuacao")]
    pub time: String,
    #[serde(rename = "localAutuacao")]
    pub location: String,
    #[serde(rename = "observacao")]
    pub narrative: String,
    #[serde(rename = "dataCadastramentoAuto")]
    pub registered_on: String,
    #[serde(rename = "idPreposto")]
    pub agent_id: i64,
    #[serde(rename = "idLinha")]
    pub line_id: i64,
    #[serde(rename = "idPermVei")]
    pub vehicle_id: i64,
    #[serde(rename = "serie")]
    pub series: Option<String>,
    #[serde(rename = "idTipoAuto")]
    pub report_type_id: Option<i64>,
    #[serde(rename = "usuarioWeb")]
    pub web_user: String,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "numeroVeiculo")]
    pub fleet_number: String,
    #[serde(rename = "numeroRegPreposto")]
    pub agent_registration: String,
    #[serde(rename = "nomePreposto")]
    pub agent_name: String,
    #[serde(rename = "cdLinha")]
    pub line_code: String,
    #[serde(rename = "denominacaoLinha")]
    pub line_name: String,
    #[serde(rename = "modeloVeiculo")]
    pub vehicle_model: String,
    #[serde(rename = "anoVeiculo")]
    pub vehicle_year: i32,
    #[serde(rename = "corVeiculo")]
    pub vehicle_color: String,
    #[serde(rename = "cienciaInfrator")]
    pub offender_acknowledged: Option<bool>,
    #[serde(rename = "idLocalidade")]
    pub locality_id: i64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "LatitudeImagem")]
    pub image_latitude: f64,
    #[serde(rename = "LongitudeImagem")]
    pub image_longitude: f64,
}

impl ReportPayload {
    /// Flatten the report aggregate plus the acting user into the wire shape.
    pub fn from_report(report: &ViolationReport, user: &SessionUser) -> Self {
        Self {
            employee_id: user.employee_id,
            permission_id: report.operator_id,
            violation_id: report.violation_id,
            date: report.date.clone(),
            time: report.time.clone(),
            location: report.location.clone(),
            narrative: report.narrative.clone(),
            registered_on: report.created_at.format("%Y-%m-%d").to_string(),
            agent_id: report.agent_id,
            line_id: report.line_id,
            vehicle_id: report.vehicle_id,
            series: None,
            report_type_id: None,
            web_user: user.username.clone(),
            plate: report.plate.clone(),
            fleet_number: report.fleet_number.clone(),
            agent_registration: report.agent_registration.clone(),
            agent_name: report.agent_name.clone(),
            line_code: report.line_code.clone(),
            line_name: report.line_name.clone(),
            vehicle_model: report.model.clone(),
            vehicle_year: report.year,
            vehicle_color: report.color.clone(),
            offender_acknowledged: None,
            locality_id: report.locality_id,
            latitude: report.latitude,
            longitude: report.longitude,
            image_latitude: 0.0,
            image_longitude: 0.0,
        }
    }
}

/// Acting-user identity attached to the protocol submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    #[serde(rename = "IdUsuario")]
    pub user_id: i64,
    #[serde(rename = "usuarioWeb")]
    pub web_user: String,
}

impl DocumentMeta {
    pub fn from_session(user: &SessionUser) -> Self {
        Self {
            user_id: user.user_id,
            web_user: user.username.clone(),
        }
    }
}

/// Response of a successful protocol submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedReport {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "numeroDocumento")]
    pub assigned_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            user_id: 1560,
            employee_id: 88,
            full_name: "Jose Inspetor".into(),
            username: "jinspetor".into(),
        }
    }

    #[test]
    fn payload_flattens_report_and_user() {
        let mut report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        report.operator_id = 42;
        report.vehicle_id = 7;
        report.plate = "ABC1D23".into();
        report.violation_id = 5;

        let payload = ReportPayload::from_report(&report, &sample_user());
        assert_eq!(payload.employee_id, 88);
        assert_eq!(payload.permission_id, 42);
        assert_eq!(payload.vehicle_id, 7);
        assert_eq!(payload.web_user, "jinspetor");
        assert_eq!(payload.date, "2025-10-03");
    }

    #[test]
    fn payload_serializes_with_backend_field_names() {
        let report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        let payload = ReportPayload::from_report(&report, &sample_user());
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("idFuncionario").is_some());
        assert!(json.get("idPermVei").is_some());
        assert!(json.get("dataAutuacao").is_some());
        assert!(json.get("Latitude").is_some());
        assert!(json.get("employee_id").is_none());
    }

    #[test]
    fn created_report_parses_assigned_number() {
        let json = r#"{"message":"ok","numeroDocumento":"2025099","arquivo":null}"#;
        let created: CreatedReport = serde_json::from_str(json).unwrap();
        assert_eq!(created.assigned_number, "2025099");
    }

    #[test]
    fn auth_response_accepts_missing_fields() {
        let ok: AuthResponse = serde_json::from_str(r#"{"mensagem":"Acesso permitido","id_usuario":1560}"#).unwrap();
        assert_eq!(ok.user_id, Some(1560));

        let rejected: AuthResponse = serde_json::from_str(r#"{"message":"expired"}"#).unwrap();
        assert_eq!(rejected.message, "");
        assert_eq!(rejected.detail.as_deref(), Some("expired"));
    }
}
