//! Typed reference entities received from the protocol backend.
//!
//! These are defined at the API boundary so untyped payloads never flow
//! into the form state. Field renames match the backend's wire names,
//! which are fixed.

use serde::{Deserialize, Serialize};

/// A licensed transit company, identified by a numeric permission id and a
/// service sigla. The sigla scopes the line and agent lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    #[serde(rename = "idPermissao")]
    pub permission_id: i64,
    #[serde(rename = "nomeOperadora")]
    pub name: String,
    #[serde(rename = "siglaServico")]
    pub service_sigla: String,
}

impl Operator {
    pub fn label(&self) -> String {
        format!("{} - {}", self.service_sigla, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "numeroVeiculo")]
    pub fleet_number: String,
    #[serde(rename = "modeloVeiculo")]
    pub model: String,
    #[serde(rename = "corVeiculo")]
    pub color: String,
    #[serde(rename = "anoVeiculo")]
    pub year: i32,
}

impl Vehicle {
    pub fn label(&self) -> String {
        format!("{} - {}", self.plate, self.model)
    }
}

/// A scheduled transit route, scoped to an operator and a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    #[serde(rename = "idLinha")]
    pub id: i64,
    #[serde(rename = "codigoLinha")]
    pub code: String,
    #[serde(rename = "denominacaoLinha")]
    pub name: String,
    #[serde(rename = "nomeOperadora", default)]
    pub operator_name: String,
}

impl Line {
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// The operator's designated legal representative ("preposto").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "idPreposto")]
    pub id: i64,
    #[serde(rename = "NomePreposto")]
    pub name: String,
    #[serde(rename = "numeroRegPreposto", default)]
    pub registration: String,
    #[serde(rename = "NomeOperadora", default)]
    pub operator_name: String,
}

impl Agent {
    pub fn label(&self) -> String {
        if self.registration.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.registration)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationCode {
    #[serde(rename = "idInfracao")]
    pub id: i64,
    #[serde(rename = "codigoInfracao")]
    pub code: i64,
    #[serde(rename = "descricaoInfracao")]
    pub description: String,
}

impl ViolationCode {
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.description)
    }
}

/// An administrative region used to classify the violation's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// One row of the employee lookup; the first row carries the identity used
/// on protocol submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    #[serde(rename = "IdUsuario")]
    pub user_id: i64,
    #[serde(rename = "IdFuncionario")]
    pub employee_id: i64,
    #[serde(rename = "NomeFuncionario")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_deserializes_from_wire_names() {
        let json = r#"{"idPermissao":42,"nomeOperadora":"Viacao Central","siglaServico":"VC"}"#;
        let op: Operator = serde_json::from_str(json).unwrap();
        assert_eq!(op.permission_id, 42);
        assert_eq!(op.service_sigla, "VC");
        assert_eq!(op.label(), "VC - Viacao Central");
    }

    #[test]
    fn vehicle_deserializes_from_wire_names() {
        let json = r#"{"id":7,"placa":"ABC1D23","numeroVeiculo":"30112","modeloVeiculo":"MB O-500","corVeiculo":"Branca","anoVeiculo":2019}"#;
        let v: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(v.plate, "ABC1D23");
        assert_eq!(v.year, 2019);
    }

    #[test]
    fn agent_registration_defaults_to_empty() {
        let json = r#"{"idPreposto":3,"NomePreposto":"Maria Souza","NomeOperadora":"Viacao Central"}"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.registration, "");
        assert_eq!(agent.label(), "Maria Souza");
    }

    #[test]
    fn employee_detail_first_row_shape() {
        let json = r#"[{"IdUsuario":1560,"IdFuncionario":88,"NomeFuncionario":"Jose Inspetor"}]"#;
        let rows: Vec<EmployeeDetail> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].employee_id, 88);
        assert!(rows[0].email.is_none());
    }
}
