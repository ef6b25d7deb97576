use app::reference::{load_base_data, load_operator_scoped_data};
use pretty_assertions::assert_eq;

use crate::common::MockApi;

#[tokio::test]
async fn base_tier_populates_all_four_lists() {
    let api = MockApi::default();
    let data = load_base_data(&api, "2025-10-03").await;

    assert_eq!(data.operators.len(), 2);
    assert_eq!(data.vehicles.len(), 2);
    assert_eq!(data.violations.len(), 1);
    assert_eq!(data.localities.len(), 1);
    assert!(data.failures.is_empty());
}

#[tokio::test]
async fn one_failed_lookup_degrades_alone() {
    let api = MockApi::default().fail_list("vehicles");
    let data = load_base_data(&api, "2025-10-03").await;

    assert!(data.vehicles.is_empty());
    assert_eq!(data.failures, vec!["vehicles"]);
    // The other lists still populated.
    assert_eq!(data.operators.len(), 2);
    assert_eq!(data.violations.len(), 1);
    assert_eq!(data.localities.len(), 1);
}

#[tokio::test]
async fn every_lookup_failing_still_returns_a_usable_value() {
    let api = MockApi::default()
        .fail_list("operators")
        .fail_list("vehicles")
        .fail_list("violations")
        .fail_list("localities");
    let data = load_base_data(&api, "2025-10-03").await;

    assert!(data.operators.is_empty());
    assert_eq!(data.failures.len(), 4);
}

#[tokio::test]
async fn operator_tier_is_scoped_by_sigla() {
    let api = MockApi::default();
    let data = load_operator_scoped_data(&api, "VC", "2025-10-03").await;

    assert_eq!(data.lines.len(), 1);
    assert_eq!(data.agents.len(), 1);
    assert!(data.failures.is_empty());
    assert_eq!(api.last_scoped_sigla.borrow().as_deref(), Some("VC"));
}

#[tokio::test]
async fn failed_lines_do_not_block_agents() {
    let api = MockApi::default().fail_list("lines");
    let data = load_operator_scoped_data(&api, "VC", "2025-10-03").await;

    assert!(data.lines.is_empty());
    assert_eq!(data.agents.len(), 1);
    assert_eq!(data.failures, vec!["lines"]);
}
