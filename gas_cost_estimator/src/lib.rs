//!
//! The gas cost estimator library.
//!

pub mod cost;
pub mod gas_price_feed;
pub mod harness;
pub mod output;
pub mod price_feed;
pub mod report;
pub mod sourced;
pub mod status;

pub use crate::cost::chain::ChainPricing;
pub use crate::cost::record::CostRecord;
pub use crate::cost::Calculator;
pub use crate::gas_price_feed::error::Error as GasPriceFeedError;
pub use crate::gas_price_feed::etherscan::EtherscanOracle;
pub use crate::gas_price_feed::rollup_gas_price;
pub use crate::gas_price_feed::GasOracle;
pub use crate::gas_price_feed::GasPriceFeed;
pub use crate::gas_price_feed::GasPrices;
pub use crate::harness::error::Error as HarnessError;
pub use crate::harness::Harness;
pub use crate::output::CostReport;
pub use crate::price_feed::coingecko::CoinGeckoSource;
pub use crate::price_feed::error::Error as PriceFeedError;
pub use crate::price_feed::PriceFeed;
pub use crate::price_feed::PriceSource;
pub use crate::report::error::Error as ReportError;
pub use crate::report::format::Format as ReportFormat;
pub use crate::report::row::Row as GasReportRow;
pub use crate::report::GasReport;
pub use crate::sourced::Sourced;
pub use crate::status::Status;

/// The successful process exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed process exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The environment variable holding the gas oracle API key.
pub const ENVIRONMENT_VARIABLE_ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
