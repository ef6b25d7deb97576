//! Form state for the report screen.
//!
//! One struct owns the whole report snapshot; the component keeps it in a
//! single signal so every mutation is a whole-snapshot replace and the
//! renderer never observes a half-applied cascade. The selection setters
//! are the only write paths for reference fields, which keeps the
//! clear-downstream rules in one place:
//!
//!   date -> operator -> { vehicle, agent, line }
//!
//! Changing a tier always clears everything below it in the same call.

use chrono::Local;
use shared_types::{Agent, Line, Locality, Operator, Vehicle, ViolationCode, ViolationReport};

pub fn today_iso() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportForm {
    pub report: ViolationReport,
}

impl ReportForm {
    /// Fresh report dated now.
    pub fn new() -> Self {
        Self {
            report: ViolationReport::new(today_iso(), now_hhmm()),
        }
    }

    /// Hydrate from a stored draft for edit mode.
    pub fn from_report(report: ViolationReport) -> Self {
        Self { report }
    }

    /// New occurrence date. The operator roster is date-scoped, so the
    /// operator selection and everything below it is no longer valid.
    pub fn set_date(&mut self, date: String) {
        self.report.date = date;
        self.clear_operator();
        self.clear_vehicle();
        self.clear_agent();
        self.clear_line();
    }

    pub fn set_time(&mut self, time: String) {
        self.report.time = time;
    }

    /// Select an operator by permission id. Returns the service sigla on a
    /// match so the caller can kick off the operator-scoped reload; a stale
    /// id clears the selection and triggers nothing.
    pub fn select_operator(&mut self, id: i64, operators: &[Operator]) -> Option<String> {
        self.clear_vehicle();
        self.clear_agent();
        self.clear_line();
        match operators.iter().find(|o| o.permission_id == id) {
            Some(operator) => {
                self.report.operator_id = operator.permission_id;
                self.report.operator_sigla = operator.service_sigla.clone();
                self.report.operator_name = operator.name.clone();
                Some(operator.service_sigla.clone())
            }
            None => {
                self.clear_operator();
                None
            }
        }
    }

    pub fn select_vehicle(&mut self, id: i64, vehicles: &[Vehicle]) {
        match vehicles.iter().find(|v| v.id == id) {
            Some(vehicle) => {
                self.report.vehicle_id = vehicle.id;
                self.report.fleet_number = vehicle.fleet_number.clone();
                self.report.plate = vehicle.plate.clone();
                self.report.model = vehicle.model.clone();
                self.report.color = vehicle.color.clone();
                self.report.year = vehicle.year;
            }
            None => self.clear_vehicle(),
        }
    }

    pub fn select_agent(&mut self, id: i64, agents: &[Agent]) {
        match agents.iter().find(|a| a.id == id) {
            Some(agent) => {
                self.report.agent_id = agent.id;
                self.report.agent_name = agent.name.clone();
                self.report.agent_registration = agent.registration.clone();
            }
            None => self.clear_agent(),
        }
    }

    pub fn select_line(&mut self, id: i64, lines: &[Line]) {
        match lines.iter().find(|l| l.id == id) {
            Some(line) => {
                self.report.line_id = line.id;
                self.report.line_code = line.code.clone();
                self.report.line_name = line.name.clone();
            }
            None => self.clear_line(),
        }
    }

    pub fn select_locality(&mut self, id: i64, localities: &[Locality]) {
        match localities.iter().find(|l| l.id == id) {
            Some(locality) => {
                self.report.locality_id = locality.id;
                self.report.locality_description = locality.description.clone();
            }
            None => {
                self.report.locality_id = 0;
                self.report.locality_description = String::new();
            }
        }
    }

    /// The violation keeps no denormalized copy; the narrative is free text.
    pub fn select_violation(&mut self, id: i64, codes: &[ViolationCode]) {
        self.report.violation_id = codes
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.id)
            .unwrap_or(0);
    }

    fn clear_operator(&mut self) {
        self.report.operator_id = 0;
        self.report.operator_sigla = String::new();
        self.report.operator_name = String::new();
    }

    fn clear_vehicle(&mut self) {
        self.report.vehicle_id = 0;
        self.report.fleet_number = String::new();
        self.report.plate = String::new();
        self.report.model = String::new();
        self.report.color = String::new();
        self.report.year = 0;
    }

    fn clear_agent(&mut self) {
        self.report.agent_id = 0;
        self.report.agent_name = String::new();
        self.report.agent_registration = String::new();
    }

    fn clear_line(&mut self) {
        self.report.line_id = 0;
        self.report.line_code = String::new();
        self.report.line_name = String::new();
    }
}

impl Default for ReportForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn operators() -> Vec<Operator> {
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

    fn vehicles() -> Vec<Vehicle> {
        vec![Vehicle {
            id: 7,
            plate: "ABC1D23".into(),
            fleet_number: "30112".into(),
            model: "MB O-500".into(),
            color: "Branca".into(),
            year: 2019,
        }]
    }

    fn lines() -> Vec<Line> {
        vec![Line {
            id: 31,
            code: "0.130".into(),
            name: "Rodoviaria - Ceilandia".into(),
            operator_name: "Viacao Central".into(),
        }]
    }

    fn agents() -> Vec<Agent> {
        vec![Agent {
            id: 3,
            name: "Maria Souza".into(),
            registration: "RG-9921".into(),
            operator_name: "Viacao Central".into(),
        }]
    }

    #[test]
    fn selecting_a_vehicle_copies_every_derived_field() {
        let mut form = ReportForm::new();
        form.select_vehicle(7, &vehicles());

        assert_eq!(form.report.vehicle_id, 7);
        assert_eq!(form.report.plate, "ABC1D23");
        assert_eq!(form.report.fleet_number, "30112");
        assert_eq!(form.report.model, "MB O-500");
        assert_eq!(form.report.color, "Branca");
        assert_eq!(form.report.year, 2019);
    }

    #[test]
    fn selecting_a_new_operator_clears_downstream_selections() {
        let mut form = ReportForm::new();
        form.set_date("2025-10-03".into());
        let sigla = form.select_operator(1, &operators());
        assert_eq!(sigla.as_deref(), Some("VC"));

        form.select_vehicle(7, &vehicles());
        form.select_line(31, &lines());
        form.select_agent(3, &agents());

        form.select_operator(2, &operators());
        assert_eq!(form.report.operator_id, 2);
        assert_eq!(form.report.vehicle_id, 0);
        assert_eq!(form.report.plate, "");
        assert_eq!(form.report.year, 0);
        assert_eq!(form.report.line_id, 0);
        assert_eq!(form.report.line_code, "");
        assert_eq!(form.report.agent_id, 0);
        assert_eq!(form.report.agent_name, "");
    }

    #[test]
    fn changing_the_date_clears_operator_and_below() {
        let mut form = ReportForm::new();
        form.select_operator(1, &operators());
        form.select_vehicle(7, &vehicles());

        form.set_date("2025-11-01".into());
        assert_eq!(form.report.date, "2025-11-01");
        assert_eq!(form.report.operator_id, 0);
        assert_eq!(form.report.operator_sigla, "");
        assert_eq!(form.report.vehicle_id, 0);
    }

    #[test]
    fn stale_ids_clear_instead_of_erroring() {
        let mut form = ReportForm::new();
        form.select_line(9999, &lines());
        assert_eq!(form.report.line_id, 0);
        assert_eq!(form.report.line_name, "");

        let sigla = form.select_operator(9999, &operators());
        assert!(sigla.is_none());
        assert_eq!(form.report.operator_id, 0);
    }

    #[test]
    fn reselecting_replaces_stale_denormalized_text() {
        let mut line_a = lines();
        line_a.push(Line {
            id: 32,
            code: "0.131".into(),
            name: "Rodoviaria - Gama".into(),
            operator_name: "Viacao Central".into(),
        });

        let mut form = ReportForm::new();
        form.select_line(31, &line_a);
        assert_eq!(form.report.line_code, "0.130");
        form.select_line(32, &line_a);
        assert_eq!(form.report.line_code, "0.131");
        assert_eq!(form.report.line_name, "Rodoviaria - Gama");
    }

    #[test]
    fn violation_selection_holds_only_the_id() {
        let codes = vec![ViolationCode {
            id: 5,
            code: 7031,
            description: "Trafegar fora do itinerario".into(),
        }];
        let mut form = ReportForm::new();
        form.select_violation(5, &codes);
        assert_eq!(form.report.violation_id, 5);
        form.select_violation(6, &codes);
        assert_eq!(form.report.violation_id, 0);
    }
}
