//!
//! The cost report output tests.
//!

use crate::cost::chain::ChainPricing;
use crate::cost::Calculator;
use crate::gas_price_feed::rollup_gas_price;
use crate::output::CostReport;
use crate::report::GasReport;

fn report(text: &str) -> CostReport {
    let gas_report = GasReport::from_text(text).expect("Failed to parse a gas report");
    Calculator::new(
        ChainPricing::new(3.0, 2300.0),
        ChainPricing::new(rollup_gas_price(3.0), 1.5),
    )
    .calculate(&gas_report)
    .into()
}

#[test]
fn four_space_indentation() {
    let json = report("| transferFunds | 21 | 50000 | 10 | 60000 |").to_json();

    assert_eq!(
        json,
        r#"[
    {
        "function_name": "transferFunds",
        "amount": 60000,
        "total_cost_eth_eth": "0.00018000",
        "total_cost_eth_usd": "0.41400000",
        "total_cost_opt_eth": "0.00001800",
        "total_cost_opt_usd": "0.00002700"
    }
]"#
    );
}

#[test]
fn empty_report() {
    assert_eq!(CostReport::default().to_json(), "[]");
}

#[test]
fn write_and_read_back() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("calculated_costs.json");
    std::fs::write(path.as_path(), "previous run output that is much longer than the new one")
        .expect("Failed to seed the output file");
    let written = report(
        "| deposit | 1 | 41000 | 2 | 43500 |\n| withdraw | 1 | 30100 | 2 | 31000 |",
    );

    written
        .write_to_file(path.as_path())
        .expect("Failed to write the cost report");
    let read = CostReport::try_from(path.as_path()).expect("Failed to read the cost report");

    assert_eq!(read, written);
    assert_eq!(read.records.len(), 2);
    let fiat_cost = read.records[1]
        .total_cost_eth_usd
        .parse::<f64>()
        .expect("Always valid");
    assert!((fiat_cost - 31000.0 * (3.0 * 1e-9) * 2300.0).abs() < 5e-9);
}

#[test]
fn unwritable_path() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("missing").join("calculated_costs.json");

    assert!(report("").write_to_file(path.as_path()).is_err());
}

#[test]
fn harness_to_cost_report() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let raw_output_path = directory.path().join("gas-report.json");
    let output_path = directory.path().join("calculated_costs.json");
    let harness = crate::harness::Harness::new(
        "sh".to_owned(),
        vec![
            "-c".to_owned(),
            "printf '| transferFunds | 21 | 50000 | 10 | 60000 |\\n'".to_owned(),
        ],
        std::time::Duration::from_secs(30),
        raw_output_path,
    )
    .expect("The `sh` executable must be available");

    let stdout = harness.run().expect("Failed to run the harness");
    let gas_report = GasReport::parse(stdout.as_str(), crate::report::format::Format::Text)
        .expect("Failed to parse a gas report");
    gas_report
        .ensure_not_empty(crate::report::format::Format::Text)
        .expect("The gas report must have rows");
    let cost_report: CostReport = Calculator::new(
        ChainPricing::new(3.0, 2300.0),
        ChainPricing::new(rollup_gas_price(3.0), 1.5),
    )
    .calculate(&gas_report)
    .into();
    cost_report
        .write_to_file(output_path.as_path())
        .expect("Failed to write the cost report");

    let written = std::fs::read_to_string(output_path).expect("Failed to read the cost report");
    assert_eq!(written, report("| transferFunds | 21 | 50000 | 10 | 60000 |").to_json());
    assert!(written.contains(r#""total_cost_opt_usd": "0.00002700""#));
}
