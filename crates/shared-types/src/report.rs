use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

/// The one violation domain this client covers.
pub const REPORT_CATEGORY: &str = "STPC";

/// Lifecycle status of a violation report.
///
/// `Submitted` is only reachable through a successful protocol call;
/// local saves always produce `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReportStatus {
    #[default]
    Draft,
    Submitted,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Draft => write!(f, "Draft"),
            ReportStatus::Submitted => write!(f, "Submitted"),
        }
    }
}

/// The violation-report aggregate being edited.
///
/// Reference selections hold the internal numeric id plus denormalized
/// display fields copied from the matching collection entry at selection
/// time. A zero id means "no selection" and all derived fields empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ViolationReport {
    pub id: Uuid,
    /// Official report number, assigned by the backend on protocol.
    pub number: Option<String>,
    pub category: String,
    pub service_order: String,

    /// ISO calendar date of the occurrence. Scopes the operator roster.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Set the occurrence date."))
    )]
    pub date: String,
    /// Occurrence time, HH:MM.
    pub time: String,

    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select an operator."))
    )]
    pub operator_id: i64,
    pub operator_sigla: String,
    pub operator_name: String,

    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select a vehicle."))
    )]
    pub vehicle_id: i64,
    pub fleet_number: String,
    pub plate: String,
    pub model: String,
    pub color: String,
    pub year: i32,

    pub agent_id: i64,
    pub agent_name: String,
    pub agent_registration: String,

    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select a line."))
    )]
    pub line_id: i64,
    pub line_code: String,
    pub line_name: String,

    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select the administrative region."))
    )]
    pub locality_id: i64,
    pub locality_description: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,

    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Select a violation."))
    )]
    pub violation_id: i64,
    pub narrative: String,

    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    /// Filenames only; attachment bytes never reach the draft store.
    pub attachment_names: Vec<String>,
}

impl ViolationReport {
    /// Fresh draft for the given occurrence date and time.
    pub fn new(date: String, time: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: None,
            category: REPORT_CATEGORY.to_string(),
            service_order: String::new(),
            date,
            time,
            operator_id: 0,
            operator_sigla: String::new(),
            operator_name: String::new(),
            vehicle_id: 0,
            fleet_number: String::new(),
            plate: String::new(),
            model: String::new(),
            color: String::new(),
            year: 0,
            agent_id: 0,
            agent_name: String::new(),
            agent_registration: String::new(),
            line_id: 0,
            line_code: String::new(),
            line_name: String::new(),
            locality_id: 0,
            locality_description: String::new(),
            location: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            violation_id: 0,
            narrative: String::new(),
            status: ReportStatus::Draft,
            created_at: Utc::now(),
            attachment_names: Vec::new(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.status == ReportStatus::Submitted
    }

    /// Header label: the official number once assigned, the draft marker
    /// otherwise.
    pub fn display_number(&self) -> String {
        self.number
            .clone()
            .unwrap_or_else(|| "Draft".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_an_empty_draft() {
        let report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        assert_eq!(report.status, ReportStatus::Draft);
        assert_eq!(report.category, REPORT_CATEGORY);
        assert_eq!(report.operator_id, 0);
        assert_eq!(report.vehicle_id, 0);
        assert!(report.number.is_none());
        assert_eq!(report.display_number(), "Draft");
    }

    #[test]
    fn status_roundtrips_through_json() {
        let mut report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        report.status = ReportStatus::Submitted;
        report.number = Some("2025099".into());
        let json = serde_json::to_string(&report).unwrap();
        let parsed: ViolationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, ReportStatus::Submitted);
        assert_eq!(parsed.display_number(), "2025099");
    }

    #[cfg(feature = "validation")]
    #[test]
    fn validation_names_every_missing_reference() {
        use validator::Validate;

        let report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        let errors = report.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["operator_id", "vehicle_id", "line_id", "locality_id", "violation_id"] {
            assert!(fields.contains_key(field), "missing rule for {field}");
        }
    }

    #[cfg(feature = "validation")]
    #[test]
    fn complete_report_passes_validation() {
        use validator::Validate;

        let mut report = ViolationReport::new("2025-10-03".into(), "14:30".into());
        report.operator_id = 1;
        report.vehicle_id = 2;
        report.line_id = 3;
        report.locality_id = 4;
        report.violation_id = 5;
        assert!(report.validate().is_ok());
    }
}
