//!
//! The gas price feed.
//!

pub mod error;
pub mod etherscan;


use crate::sourced::Sourced;

use self::error::Error;

/// The base chain gas price used when the oracle fails, in gwei.
pub const FALLBACK_GAS_PRICE: f64 = 3.0;

/// The rollup gas price as a fraction of the base chain gas price.
pub const ROLLUP_GAS_PRICE_RATIO: f64 = 0.1;

///
/// Derives the rollup gas price from the base chain gas price.
///
pub fn rollup_gas_price(base_gas_price: f64) -> f64 {
    ROLLUP_GAS_PRICE_RATIO * base_gas_price
}

///
/// The gas prices of both chains.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GasPrices {
    /// The base chain gas price in gwei.
    pub base: Sourced<f64>,
    /// The rollup gas price in gwei, tagged like the base chain one.
    pub rollup: Sourced<f64>,
}

impl GasPrices {
    ///
    /// Derives the rollup gas price from the base chain one.
    ///
    pub fn new(base: Sourced<f64>) -> Self {
        let rollup = base.clone().map(rollup_gas_price);
        Self { base, rollup }
    }
}

///
/// A remote service recommending base chain gas prices.
///
pub trait GasOracle {
    ///
    /// Returns the recommended "safe" gas price in gwei.
    ///
    fn safe_gas_price(&self) -> Result<f64, Error>;
}

///
/// The gas price feed with a hardcoded fallback.
///
#[derive(Debug)]
pub struct GasPriceFeed<O> {
    /// The remote gas oracle.
    oracle: O,
}

impl<O> GasPriceFeed<O>
where
    O: GasOracle,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    ///
    /// Fetches the base chain gas price, falling back to [`FALLBACK_GAS_PRICE`] on any
    /// oracle failure.
    ///
    pub fn fetch_safe_gas_price(&self) -> Sourced<f64> {
        match self.oracle.safe_gas_price() {
            Ok(gas_price) => Sourced::Live(gas_price),
            Err(error) => Sourced::Fallback {
                value: FALLBACK_GAS_PRICE,
                reason: error.to_string(),
            },
        }
    }

    ///
    /// Resolves the gas prices of both chains.
    ///
    /// A configured base chain gas price is used as is, and the oracle is not queried.
    ///
    pub fn resolve(&self, configured: Option<f64>) -> GasPrices {
        let base = match configured {
            Some(gas_price) => Sourced::Configured(gas_price),
            None => self.fetch_safe_gas_price(),
        };
        GasPrices::new(base)
    }
}
