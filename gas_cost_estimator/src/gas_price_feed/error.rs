//!
//! The gas price feed error.
//!

///
/// The gas price feed error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API key is not set.
    #[error("The gas oracle API key is not set, see `--etherscan-api-key` or `${{{variable}}}`")]
    MissingApiKey {
        /// The environment variable expected to hold the key.
        variable: &'static str,
    },
    /// The request could not be sent or returned an error status.
    /// The URL is stripped, since its query carries the API key.
    #[error("Gas oracle request: {0}")]
    Request(reqwest::Error),
    /// The response does not have the expected shape.
    #[error("Gas oracle response parsing: {0}")]
    Parsing(#[from] serde_json::Error),
    /// The gas price field is not a number.
    #[error("Gas oracle returned an invalid gas price `{value}`")]
    InvalidGasPrice {
        /// The raw field value.
        value: String,
    },
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error.without_url())
    }
}
