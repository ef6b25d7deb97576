//! Shared fixtures: a configurable in-memory `ProtocolApi` and sample
//! reference collections. Failure injection and call counters let tests
//! assert both the degraded paths and the no-network-call guarantees.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use api_client::{FileUpload, ProtocolApi};
use shared_types::{
    Agent, AppError, AuthOutcome, CreatedReport, DocumentMeta, EmployeeDetail, Line, Locality,
    Operator, ReportPayload, SessionUser, Vehicle, ViolationCode,
};

pub fn sample_operators() -> Vec<Operator> {
    vec![
        Operator {
            permission_id: 1,
            name: "Viacao Central".into(),
            service_sigla: "VC".into(),
        },
        Operator {
            permission_id: 2,
            name: "Expresso Sul".into(),
            service_sigla: "ES".into(),
        },
    ]
}

pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 7,
            plate: "ABC1D23".into(),
            fleet_number: "30112".into(),
            model: "MB O-500".into(),
            color: "Branca".into(),
            year: 2019,
        },
        Vehicle {
            id: 8,
            plate: "XYZ9K88".into(),
            fleet_number: "30240".into(),
            model: "Volvo B270F".into(),
            color: "Azul".into(),
            year: 2021,
        },
    ]
}

pub fn sample_lines() -> Vec<Line> {
    vec![Line {
        id: 31,
        code: "0.130".into(),
        name: "Rodoviaria - Ceilandia".into(),
        operator_name: "Viacao Central".into(),
    }]
}

pub fn sample_agents() -> Vec<Agent> {
    vec![Agent {
        id: 3,
        name: "Maria Souza".into(),
        registration: "RG-9921".into(),
        operator_name: "Viacao Central".into(),
    }]
}

pub fn sample_violations() -> Vec<ViolationCode> {
    vec![ViolationCode {
        id: 5,
        code: 7031,
        description: "Trafegar fora do itinerario".into(),
    }]
}

pub fn sample_localities() -> Vec<Locality> {
    vec![Locality {
        id: 2,
        description: "RA III - Taguatinga".into(),
    }]
}

pub fn sample_user() -> SessionUser {
    SessionUser {
        user_id: 1560,
        employee_id: 88,
        full_name: "Jose Inspetor".into(),
        username: "jinspetor".into(),
    }
}

/// In-memory backend with per-list failure injection and call recording.
pub struct MockApi {
    pub operators: Vec<Operator>,
    pub vehicles: Vec<Vehicle>,
    pub lines: Vec<Line>,
    pub agents: Vec<Agent>,
    pub violations: Vec<ViolationCode>,
    pub localities: Vec<Locality>,
    pub employee_rows: Vec<EmployeeDetail>,
    pub auth_user_id: Option<i64>,
    pub failing: RefCell<HashSet<&'static str>>,
    pub create_error: RefCell<Option<AppError>>,
    pub assigned_number: String,
    pub create_calls: Cell<usize>,
    pub last_scoped_sigla: RefCell<Option<String>>,
    pub last_submission: RefCell<Option<(Vec<ReportPayload>, DocumentMeta, FileUpload)>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            operators: sample_operators(),
            vehicles: sample_vehicles(),
            lines: sample_lines(),
            agents: sample_agents(),
            violations: sample_violations(),
            localities: sample_localities(),
            employee_rows: vec![EmployeeDetail {
                user_id: 1560,
                employee_id: 88,
                full_name: "Jose Inspetor".into(),
                email: None,
            }],
            auth_user_id: Some(1560),
            failing: RefCell::new(HashSet::new()),
            create_error: RefCell::new(None),
            assigned_number: "2025099".into(),
            create_calls: Cell::new(0),
            last_scoped_sigla: RefCell::new(None),
            last_submission: RefCell::new(None),
        }
    }
}

impl MockApi {
    /// Make the named lookup list fail on every call.
    pub fn fail_list(self, list: &'static str) -> Self {
        self.failing.borrow_mut().insert(list);
        self
    }

    /// Make the protocol call fail with the given error.
    pub fn fail_create(self, error: AppError) -> Self {
        *self.create_error.borrow_mut() = Some(error);
        self
    }

    fn list_result<T: Clone>(&self, list: &'static str, items: &[T]) -> Result<Vec<T>, AppError> {
        if self.failing.borrow().contains(list) {
            Err(AppError::network(format!("{list} lookup is offline")))
        } else {
            Ok(items.to_vec())
        }
    }
}

impl ProtocolApi for MockApi {
    async fn authenticate(&self, _username: &str, _password: &str) -> Result<AuthOutcome, AppError> {
        self.auth_user_id
            .map(|user_id| AuthOutcome { user_id })
            .ok_or_else(|| AppError::authentication("Invalid username or password."))
    }

    async fn employee_details(&self, _user_id: i64) -> Result<Vec<EmployeeDetail>, AppError> {
        Ok(self.employee_rows.clone())
    }

    async fn operators(&self, _date: &str) -> Result<Vec<Operator>, AppError> {
        self.list_result("operators", &self.operators)
    }

    async fn vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        self.list_result("vehicles", &self.vehicles)
    }

    async fn lines(&self, service_sigla: &str, _date: &str) -> Result<Vec<Line>, AppError> {
        *self.last_scoped_sigla.borrow_mut() = Some(service_sigla.to_string());
        self.list_result("lines", &self.lines)
    }

    async fn agents(&self, service_sigla: &str) -> Result<Vec<Agent>, AppError> {
        *self.last_scoped_sigla.borrow_mut() = Some(service_sigla.to_string());
        self.list_result("agents", &self.agents)
    }

    async fn violation_codes(&self) -> Result<Vec<ViolationCode>, AppError> {
        self.list_result("violations", &self.violations)
    }

    async fn localities(&self) -> Result<Vec<Locality>, AppError> {
        self.list_result("localities", &self.localities)
    }

    async fn create_report(
        &self,
        reports: Vec<ReportPayload>,
        meta: DocumentMeta,
        file: FileUpload,
    ) -> Result<CreatedReport, AppError> {
        self.create_calls.set(self.create_calls.get() + 1);
        if let Some(error) = self.create_error.borrow().clone() {
            return Err(error);
        }
        *self.last_submission.borrow_mut() = Some((reports, meta, file));
        Ok(CreatedReport {
            message: "ok".into(),
            assigned_number: self.assigned_number.clone(),
        })
    }

    async fn pending_report_count(&self, _user_id: i64) -> Result<i64, AppError> {
        Ok(0)
    }

    async fn dispatch_reports(&self, _employee_id: i64) -> Result<(), AppError> {
        Ok(())
    }

    async fn update_password(&self, _username: &str, _new_password: &str) -> Result<(), AppError> {
        Ok(())
    }
}
