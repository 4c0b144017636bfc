//!
//! The price feed error.
//!

///
/// The price feed error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or returned an error status.
    #[error("Price request for `{asset}`: {error}")]
    Request {
        /// The requested asset identifier.
        asset: String,
        /// The underlying HTTP error.
        error: reqwest::Error,
    },
    /// The response body is not valid JSON.
    #[error("Price response for `{asset}` parsing: {error}")]
    Parsing {
        /// The requested asset identifier.
        asset: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
    },
    /// The response does not contain a numeric quote.
    #[error("Price response has no `{currency}` quote for `{asset}`")]
    MissingQuote {
        /// The requested asset identifier.
        asset: String,
        /// The requested fiat currency.
        currency: String,
    },
    /// The feed failed and there is no fallback constant for the asset.
    #[error("No price for `{asset}` is available and no fallback is defined: {reason}")]
    Unsupported {
        /// The requested asset identifier.
        asset: String,
        /// Why the feed could not be used.
        reason: String,
    },
}
