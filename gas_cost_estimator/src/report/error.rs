//!
//! The gas report parsing error.
//!

///
/// The gas report parsing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A gas column does not fit into a 64-bit integer.
    #[error("Gas report row `{function_name}` has an invalid {column} gas cost `{value}`: {error}")]
    InvalidGasCost {
        /// The function name of the row.
        function_name: String,
        /// The column name.
        column: &'static str,
        /// The raw column value.
        value: String,
        /// The underlying integer parsing error.
        error: std::num::ParseIntError,
    },
    /// The JSON report cannot be parsed.
    #[error("Gas report JSON parsing: {0}")]
    Json(#[from] serde_json::Error),
    /// No function rows have been found.
    #[error(
        "No function rows found in the {report_format} gas report. \
         Check that the harness emits a gas report, or pass `--allow-empty`"
    )]
    NoRows {
        /// The report format.
        report_format: crate::report::format::Format,
    },
}
