//! Tiered reference-data loading for the report form.
//!
//! The base tier (operators, vehicles, violations, localities) depends on
//! the occurrence date; the operator tier (lines, agents) depends on the
//! selected operator's service sigla. Each list loads independently: a
//! failed lookup degrades to an empty list and a `failures` entry, never
//! an error, so the form stays usable with whatever did arrive.

use api_client::ProtocolApi;
use futures::join;
use shared_types::{Agent, AppError, Line, Locality, Operator, Vehicle, ViolationCode};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseData {
    pub operators: Vec<Operator>,
    pub vehicles: Vec<Vehicle>,
    pub violations: Vec<ViolationCode>,
    pub localities: Vec<Locality>,
    /// Display names of the lists that failed to load.
    pub failures: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperatorData {
    pub lines: Vec<Line>,
    pub agents: Vec<Agent>,
    pub failures: Vec<&'static str>,
}

/// Load the date-scoped tier. The four fetches run concurrently and each
/// completes or fails on its own.
pub async fn load_base_data<A: ProtocolApi>(api: &A, date: &str) -> BaseData {
    let (operators, vehicles, violations, localities) = join!(
        api.operators(date),
        api.vehicles(),
        api.violation_codes(),
        api.localities()
    );

    let mut failures = Vec::new();
    BaseData {
        operators: unwrap_or_empty(operators, "operators", &mut failures),
        vehicles: unwrap_or_empty(vehicles, "vehicles", &mut failures),
        violations: unwrap_or_empty(violations, "violations", &mut failures),
        localities: unwrap_or_empty(localities, "localities", &mut failures),
        failures,
    }
}

/// Load the operator-scoped tier. Must not be called before an operator is
/// known; the form component guards on a non-empty sigla.
pub async fn load_operator_scoped_data<A: ProtocolApi>(
    api: &A,
    service_sigla: &str,
    date: &str,
) -> OperatorData {
    let (lines, agents) = join!(api.lines(service_sigla, date), api.agents(service_sigla));

    let mut failures = Vec::new();
    OperatorData {
        lines: unwrap_or_empty(lines, "lines", &mut failures),
        agents: unwrap_or_empty(agents, "agents", &mut failures),
        failures,
    }
}

fn unwrap_or_empty<T>(
    result: Result<Vec<T>, AppError>,
    list: &'static str,
    failures: &mut Vec<&'static str>,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, list, "reference lookup failed, list degrades to empty");
            failures.push(list);
            Vec::new()
        }
    }
}
