//!
//! The fiat price feed.
//!

pub mod coingecko;
pub mod error;


use crate::sourced::Sourced;

use self::error::Error;

/// The prices used when the source fails, keyed by asset identifier.
pub const FALLBACK_PRICES: [(&str, f64); 2] = [("ethereum", 2300.0), ("optimism", 1.5)];

///
/// Returns the fallback price of `asset`, if one is defined.
///
pub fn fallback_price(asset: &str) -> Option<f64> {
    FALLBACK_PRICES
        .iter()
        .find(|(identifier, _)| *identifier == asset)
        .map(|(_, price)| *price)
}

///
/// A remote service quoting spot prices of assets in a fiat currency.
///
pub trait PriceSource {
    ///
    /// Returns the price of one unit of `asset`.
    ///
    fn spot_price(&self, asset: &str) -> Result<f64, Error>;
}

///
/// The fiat price feed with hardcoded fallbacks.
///
#[derive(Debug)]
pub struct PriceFeed<S> {
    /// The remote price source.
    source: S,
}

impl<S> PriceFeed<S>
where
    S: PriceSource,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(source: S) -> Self {
        Self { source }
    }

    ///
    /// Fetches the price of `asset`.
    ///
    /// Any source failure is replaced by the fallback constant. Assets without one
    /// are reported as unsupported.
    ///
    pub fn fetch(&self, asset: &str) -> Result<Sourced<f64>, Error> {
        let error = match self.source.spot_price(asset) {
            Ok(price) => return Ok(Sourced::Live(price)),
            Err(error) => error,
        };

        match fallback_price(asset) {
            Some(value) => Ok(Sourced::Fallback {
                value,
                reason: error.to_string(),
            }),
            None => Err(Error::Unsupported {
                asset: asset.to_owned(),
                reason: error.to_string(),
            }),
        }
    }
}
