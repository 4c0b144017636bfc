//!
//! The gas cost estimator executable.
//!

pub(crate) mod arguments;

use std::time::Duration;
use std::time::Instant;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    dotenvy::dotenv().ok();

    let exit_code = match Arguments::parse().validate().and_then(main_inner) {
        Ok(()) => gas_cost_estimator::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            gas_cost_estimator::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let status = gas_cost_estimator::Status::new(arguments.quiet);
    status.step(
        "Starting",
        format!(
            "{} v{}",
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION")
        ),
    );
    let run_time_start = Instant::now();

    let http_client = reqwest::blocking::ClientBuilder::new()
        .connect_timeout(Duration::from_secs(arguments.http_timeout))
        .timeout(Duration::from_secs(arguments.http_timeout))
        .build()?;

    let price_feed =
        gas_cost_estimator::PriceFeed::new(gas_cost_estimator::CoinGeckoSource::new(
            http_client.clone(),
            arguments.price_feed_url,
            arguments.fiat_currency,
        ));
    status.step("Fetching", format!("`{}` price", arguments.base_asset));
    let base_price = price_feed.fetch(arguments.base_asset.as_str())?;
    status.fallback(
        format!("The `{}` price", arguments.base_asset).as_str(),
        &base_price,
    );
    status.step("Fetching", format!("`{}` price", arguments.rollup_asset));
    let rollup_price = price_feed.fetch(arguments.rollup_asset.as_str())?;
    status.fallback(
        format!("The `{}` price", arguments.rollup_asset).as_str(),
        &rollup_price,
    );

    if arguments.gas_price.is_none() {
        status.step("Fetching", "base chain gas price");
    }
    let gas_price_feed = gas_cost_estimator::GasPriceFeed::new(
        gas_cost_estimator::EtherscanOracle::new(
            http_client,
            arguments.gas_oracle_url,
            arguments.etherscan_api_key,
        ),
    );
    let gas_prices = gas_price_feed.resolve(arguments.gas_price);
    status.fallback("The base chain gas price", &gas_prices.base);

    let harness_arguments = gas_cost_estimator::Harness::arguments_for(
        arguments.report_format,
        arguments.harness_arguments,
    );
    let harness = gas_cost_estimator::Harness::new(
        arguments.harness,
        harness_arguments,
        Duration::from_secs(arguments.harness_timeout),
        arguments.raw_output_path,
    )?;
    status.step("Running", &harness);
    let stdout = harness.run()?;

    status.step(
        "Parsing",
        format!(
            "{} gas report {:?}",
            arguments.report_format,
            harness.raw_output_path()
        ),
    );
    let gas_report =
        gas_cost_estimator::GasReport::parse(stdout.as_str(), arguments.report_format)?;
    if !arguments.allow_empty {
        gas_report.ensure_not_empty(arguments.report_format)?;
    }

    let calculator = gas_cost_estimator::Calculator::new(
        gas_cost_estimator::ChainPricing::new(gas_prices.base.value(), base_price.value()),
        gas_cost_estimator::ChainPricing::new(gas_prices.rollup.value(), rollup_price.value()),
    );
    let cost_report = gas_cost_estimator::CostReport::from(calculator.calculate(&gas_report));

    status.step("Writing", format!("{:?}", arguments.output_path));
    cost_report.write_to_file(arguments.output_path.as_path())?;

    for (subject, sourced) in [
        (format!("`{}` price", arguments.base_asset), &base_price),
        (format!("`{}` price", arguments.rollup_asset), &rollup_price),
        ("base chain gas price".to_owned(), &gas_prices.base),
        ("rollup gas price".to_owned(), &gas_prices.rollup),
    ] {
        status.step(
            "Using",
            format!("{subject} {} ({})", sourced.value(), sourced.origin()),
        );
    }
    status.step(
        "Finished",
        format!(
            "{} records in {}m{:02}s",
            cost_report.records.len(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        ),
    );

    Ok(())
}
