//!
//! The CoinGecko simple price source.
//!

use crate::price_feed::error::Error;
use crate::price_feed::PriceSource;

///
/// The CoinGecko simple price source.
///
/// Queries `{base_url}/simple/price?ids={asset}&vs_currencies={currency}`, which answers
/// with `{ "<asset>": { "<currency>": <price> } }`.
///
#[derive(Debug, Clone)]
pub struct CoinGeckoSource {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The API root URL.
    base_url: String,
    /// The fiat currency to quote in.
    currency: String,
}

impl CoinGeckoSource {
    /// The public API root URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    /// The default fiat currency.
    pub const DEFAULT_CURRENCY: &'static str = "usd";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(http_client: reqwest::blocking::Client, base_url: String, currency: String) -> Self {
        Self {
            http_client,
            base_url,
            currency,
        }
    }

    ///
    /// Extracts the `currency` quote of `asset` from a response body.
    ///
    pub fn parse_response(body: &str, asset: &str, currency: &str) -> Result<f64, Error> {
        let json: serde_json::Value =
            serde_json::from_str(body).map_err(|error| Error::Parsing {
                asset: asset.to_owned(),
                error,
            })?;
        json.get(asset)
            .and_then(|quotes| quotes.get(currency))
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| Error::MissingQuote {
                asset: asset.to_owned(),
                currency: currency.to_owned(),
            })
    }
}

impl PriceSource for CoinGeckoSource {
    fn spot_price(&self, asset: &str) -> Result<f64, Error> {
        let url = format!("{}/simple/price", self.base_url.trim_end_matches('/'));
        let body = self
            .http_client
            .get(url)
            .query(&[("ids", asset), ("vs_currencies", self.currency.as_str())])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|error| Error::Request {
                asset: asset.to_owned(),
                error,
            })?;
        Self::parse_response(body.as_str(), asset, self.currency.as_str())
    }
}
