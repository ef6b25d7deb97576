use app::form::ReportForm;
use pretty_assertions::assert_eq;

use crate::common::{sample_agents, sample_lines, sample_operators, sample_vehicles};

#[test]
fn selecting_a_new_operator_empties_every_downstream_selection() {
    let mut form = ReportForm::new();
    form.set_date("2025-10-03".into());

    let sigla = form.select_operator(1, &sample_operators());
    assert_eq!(sigla.as_deref(), Some("VC"));

    form.select_vehicle(7, &sample_vehicles());
    form.select_agent(3, &sample_agents());
    form.select_line(31, &sample_lines());
    assert_eq!(form.report.vehicle_id, 7);

    let sigla = form.select_operator(2, &sample_operators());
    assert_eq!(sigla.as_deref(), Some("ES"));
    assert_eq!(form.report.vehicle_id, 0);
    assert_eq!(form.report.agent_id, 0);
    assert_eq!(form.report.line_id, 0);
    assert_eq!(form.report.plate, "");
    assert_eq!(form.report.agent_name, "");
    assert_eq!(form.report.line_code, "");
}

#[test]
fn denormalized_vehicle_fields_match_the_collection_entry() {
    let vehicles = sample_vehicles();
    for vehicle in &vehicles {
        let mut form = ReportForm::new();
        form.select_vehicle(vehicle.id, &vehicles);
        assert_eq!(form.report.plate, vehicle.plate);
        assert_eq!(form.report.model, vehicle.model);
        assert_eq!(form.report.color, vehicle.color);
        assert_eq!(form.report.year, vehicle.year);
        assert_eq!(form.report.fleet_number, vehicle.fleet_number);
    }
}

#[test]
fn a_line_id_absent_from_the_collection_clears_the_selection() {
    let mut form = ReportForm::new();
    form.select_line(31, &sample_lines());
    assert_eq!(form.report.line_id, 31);

    form.select_line(9999, &sample_lines());
    assert_eq!(form.report.line_id, 0);
    assert_eq!(form.report.line_code, "");
    assert_eq!(form.report.line_name, "");
}

#[test]
fn changing_the_date_invalidates_the_operator_chain() {
    let mut form = ReportForm::new();
    form.select_operator(1, &sample_operators());
    form.select_vehicle(7, &sample_vehicles());
    form.select_agent(3, &sample_agents());

    form.set_date("2025-10-04".into());
    assert_eq!(form.report.operator_id, 0);
    assert_eq!(form.report.operator_sigla, "");
    assert_eq!(form.report.vehicle_id, 0);
    assert_eq!(form.report.agent_id, 0);
}

#[test]
fn operator_reselection_after_date_change_uses_the_fresh_collection() {
    let mut form = ReportForm::new();
    form.select_operator(1, &sample_operators());
    form.set_date("2025-10-04".into());

    // The collection shrank after the date change; the old id is now stale.
    let fresh = vec![sample_operators().remove(1)];
    let sigla = form.select_operator(1, &fresh);
    assert!(sigla.is_none());
    assert_eq!(form.report.operator_id, 0);
}
