//!
//! The gas cost calculator tests.
//!

use crate::cost::chain::ChainPricing;
use crate::cost::record::CostRecord;
use crate::cost::Calculator;
use crate::gas_price_feed::rollup_gas_price;
use crate::report::row::Row;
use crate::report::GasReport;

fn calculator(base_gas_price: f64, base_fiat_price: f64, rollup_fiat_price: f64) -> Calculator {
    Calculator::new(
        ChainPricing::new(base_gas_price, base_fiat_price),
        ChainPricing::new(rollup_gas_price(base_gas_price), rollup_fiat_price),
    )
}

fn parse_cost(cost: &str) -> f64 {
    cost.parse::<f64>().expect("Always valid")
}

#[test]
fn transfer_funds_with_fallback_prices() {
    let report = GasReport::from_text("| transferFunds | 21 | 50000 | 10 | 60000 |").unwrap();

    let records = calculator(3.0, 2300.0, 1.5).calculate(&report);

    assert_eq!(
        records,
        vec![CostRecord {
            function_name: "transferFunds".to_owned(),
            amount: 60000,
            total_cost_eth_eth: "0.00018000".to_owned(),
            total_cost_eth_usd: "0.41400000".to_owned(),
            total_cost_opt_eth: "0.00001800".to_owned(),
            total_cost_opt_usd: "0.00002700".to_owned(),
        }]
    );
}

#[test]
fn one_record_per_row_in_order() {
    let report = GasReport {
        rows: vec![
            Row::new("mint".to_owned(), 1, 31000),
            Row::new("burn".to_owned(), 1, 60000),
            Row::new("mint".to_owned(), 1, 60000),
        ],
    };

    let records = calculator(3.0, 2300.0, 1.5).calculate(&report);

    let names: Vec<&str> = records
        .iter()
        .map(|record| record.function_name.as_str())
        .collect();
    assert_eq!(names, vec!["mint", "burn", "mint"]);
    assert_eq!(records[0].amount, 31000);
    assert_eq!(records[0].total_cost_eth_eth, "0.00009300");
    assert_eq!(records[0].total_cost_eth_usd, "0.21390000");
    assert_eq!(records[1].total_cost_eth_usd, records[2].total_cost_eth_usd);
}

#[test]
fn costs_follow_the_formula() {
    let (amount, gas_price, fiat_price) = (123456_u64, 27.5, 3120.55);
    let pricing = ChainPricing::new(gas_price, fiat_price);

    assert_eq!(
        CostRecord::format_cost(pricing.native_cost(amount)),
        format!("{:.8}", amount as f64 * (gas_price * 1e-9))
    );
    assert_eq!(
        CostRecord::format_cost(pricing.fiat_cost(amount)),
        format!("{:.8}", amount as f64 * (gas_price * 1e-9) * fiat_price)
    );
    assert_eq!(CostRecord::format_cost(pricing.native_cost(amount)), "0.00339504");
    assert_eq!(CostRecord::format_cost(pricing.fiat_cost(amount)), "10.59439207");
}

#[test]
fn rollup_costs_scale_with_base_gas_price() {
    let row = Row::new("swap".to_owned(), 90000, 187654);

    let single = calculator(4.0, 2300.0, 1.5).record(&row);
    let tripled = calculator(12.0, 2300.0, 1.5).record(&row);

    let native_ratio =
        parse_cost(&tripled.total_cost_opt_eth) / parse_cost(&single.total_cost_opt_eth);
    let fiat_ratio =
        parse_cost(&tripled.total_cost_opt_usd) / parse_cost(&single.total_cost_opt_usd);
    assert!((native_ratio - 3.0).abs() < 1e-3);
    assert!((fiat_ratio - 3.0).abs() < 1e-3);
}

#[test]
fn costs_have_eight_decimals() {
    let record = calculator(0.0, 2300.0, 1.5).record(&Row::new("noop".to_owned(), 0, 0));

    for cost in [
        &record.total_cost_eth_eth,
        &record.total_cost_eth_usd,
        &record.total_cost_opt_eth,
        &record.total_cost_opt_usd,
    ] {
        assert_eq!(cost, "0.00000000");
    }
}
