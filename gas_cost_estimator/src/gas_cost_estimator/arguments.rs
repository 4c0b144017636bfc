//!
//! The gas cost estimator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas cost estimator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Base chain asset identifier at the price feed.
    #[arg(long, default_value = "ethereum")]
    pub base_asset: String,

    /// Rollup asset identifier at the price feed.
    #[arg(long, default_value = "optimism")]
    pub rollup_asset: String,

    /// Fiat currency the prices are quoted in.
    #[arg(long, default_value = gas_cost_estimator::CoinGeckoSource::DEFAULT_CURRENCY)]
    pub fiat_currency: String,

    /// Price feed API root URL.
    #[arg(long, default_value = gas_cost_estimator::CoinGeckoSource::DEFAULT_BASE_URL)]
    pub price_feed_url: String,

    /// Gas oracle API endpoint URL.
    #[arg(long, default_value = gas_cost_estimator::EtherscanOracle::DEFAULT_BASE_URL)]
    pub gas_oracle_url: String,

    /// Gas oracle API key.
    #[arg(
        long,
        env = gas_cost_estimator::ENVIRONMENT_VARIABLE_ETHERSCAN_API_KEY,
        hide_env_values = true
    )]
    pub etherscan_api_key: Option<String>,

    /// Base chain gas price in gwei.
    /// Skips the gas oracle if set.
    #[arg(long)]
    pub gas_price: Option<f64>,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub http_timeout: u64,

    /// Harness executable.
    #[arg(long, default_value = gas_cost_estimator::Harness::DEFAULT_PROGRAM)]
    pub harness: String,

    /// Harness argument. Can be repeated.
    /// Is set to `test --gas-report` by default.
    #[arg(
        long = "harness-arg",
        allow_hyphen_values = true,
        default_values = gas_cost_estimator::Harness::DEFAULT_ARGUMENTS
    )]
    pub harness_arguments: Vec<String>,

    /// Harness timeout in seconds.
    #[arg(long, default_value_t = gas_cost_estimator::Harness::DEFAULT_TIMEOUT_SECS)]
    pub harness_timeout: u64,

    /// Gas report format: `text` or `json`.
    /// The `json` format adds `--json` to the harness arguments.
    #[arg(long, default_value_t = gas_cost_estimator::ReportFormat::Text)]
    pub report_format: gas_cost_estimator::ReportFormat,

    /// Path the raw harness output is written to.
    #[arg(long, default_value = gas_cost_estimator::Harness::DEFAULT_RAW_OUTPUT_PATH)]
    pub raw_output_path: PathBuf,

    /// Path the cost report is written to.
    #[arg(short, long, default_value = gas_cost_estimator::CostReport::DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Writes an empty cost report instead of failing if the gas report has no rows.
    #[arg(long)]
    pub allow_empty: bool,
}

impl Arguments {
    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        if let Some(gas_price) = self.gas_price {
            if !gas_price.is_finite() || gas_price < 0.0 {
                anyhow::bail!("The gas price must be a non-negative number, got `{gas_price}`");
            }
        }
        if self.harness_timeout == 0 {
            anyhow::bail!("The harness timeout must be positive");
        }
        Ok(self)
    }
}
