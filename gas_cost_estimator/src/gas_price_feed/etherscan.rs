//!
//! The Etherscan gas oracle.
//!

use crate::gas_price_feed::error::Error;
use crate::gas_price_feed::GasOracle;

///
/// The Etherscan gas oracle response.
///
#[derive(Debug, serde::Deserialize)]
pub struct Response {
    /// The oracle recommendations.
    pub result: OracleResult,
}

///
/// The Etherscan gas oracle recommendations.
///
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OracleResult {
    /// The gas price likely to be included within a few minutes.
    pub safe_gas_price: GasPriceValue,
}

///
/// The gas price as sent by the oracle.
///
/// The documented format is a decimal string, but plain numbers are accepted too.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum GasPriceValue {
    /// A JSON number.
    Number(f64),
    /// A decimal string.
    Text(String),
}

impl TryFrom<GasPriceValue> for f64 {
    type Error = Error;

    fn try_from(value: GasPriceValue) -> Result<Self, Self::Error> {
        match value {
            GasPriceValue::Number(number) => Ok(number),
            GasPriceValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::InvalidGasPrice { value: text }),
        }
    }
}

///
/// The Etherscan gas oracle.
///
#[derive(Debug, Clone)]
pub struct EtherscanOracle {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The API endpoint URL.
    base_url: String,
    /// The API key.
    api_key: Option<String>,
}

impl EtherscanOracle {
    /// The public API endpoint URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.etherscan.io/api";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        http_client: reqwest::blocking::Client,
        base_url: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    ///
    /// Extracts the safe gas price from a response body.
    ///
    pub fn parse_response(body: &str) -> Result<f64, Error> {
        let response: Response = serde_json::from_str(body)?;
        f64::try_from(response.result.safe_gas_price)
    }
}

impl GasOracle for EtherscanOracle {
    fn safe_gas_price(&self) -> Result<f64, Error> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|api_key| !api_key.is_empty())
            .ok_or(Error::MissingApiKey {
                variable: crate::ENVIRONMENT_VARIABLE_ETHERSCAN_API_KEY,
            })?;

        let body = self
            .http_client
            .get(self.base_url.as_str())
            .query(&[
                ("module", "gastracker"),
                ("action", "gasoracle"),
                ("apikey", api_key),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        Self::parse_response(body.as_str())
    }
}
