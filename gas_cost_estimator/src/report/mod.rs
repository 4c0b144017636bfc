//!
//! The harness gas report.
//!

pub mod error;
pub mod format;
pub mod foundry_gas;
pub mod row;

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

use self::error::Error;
use self::format::Format;
use self::foundry_gas::FoundryGasReport;
use self::row::Row;

///
/// The pattern of a function row in the text gas report.
///
/// Captures the function name from the first cell, then the minimum and the average gas
/// cost. Each gas column is preceded by one skipped cell, so for Foundry's
/// `| name | min | avg | median | max | calls |` layout it yields `avg` and `max`.
///
pub const ROW_PATTERN: &str = r"\|\s+(\w+)\s+\|.*?\|\s+(\d+)\s+\|.*?\|\s+(\d+)\s+\|";

/// The compiled [`ROW_PATTERN`].
static ROW_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(ROW_PATTERN).expect("Always valid"));

///
/// The harness gas report.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GasReport {
    /// The function rows in report order.
    pub rows: Vec<Row>,
}

impl GasReport {
    ///
    /// Parses the harness output in the given format.
    ///
    pub fn parse(text: &str, format: Format) -> Result<Self, Error> {
        match format {
            Format::Text => Self::from_text(text),
            Format::Json => Self::from_json(text),
        }
    }

    ///
    /// Extracts every [`ROW_PATTERN`] match from the text table, in order.
    ///
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let rows = ROW_REGEX
            .captures_iter(text)
            .map(|captures| -> Result<Row, Error> {
                let function_name = captures[1].to_owned();
                let min = Self::parse_gas_cost(function_name.as_str(), "minimum", &captures[2])?;
                let avg = Self::parse_gas_cost(function_name.as_str(), "average", &captures[3])?;
                Ok(Row::new(function_name, min, avg))
            })
            .collect::<Result<Vec<Row>, Error>>()?;
        Ok(Self { rows })
    }

    ///
    /// Flattens the Foundry JSON report into rows, contract by contract.
    ///
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let FoundryGasReport(contracts) = serde_json::from_str(text)?;
        let rows = contracts
            .into_iter()
            .flat_map(|contract| contract.functions.into_iter())
            .map(|(function_name, function)| Row::new(function_name, function.min, function.mean))
            .collect();
        Ok(Self { rows })
    }

    ///
    /// Fails if the report has no rows.
    ///
    pub fn ensure_not_empty(&self, format: Format) -> Result<(), Error> {
        if self.rows.is_empty() {
            return Err(Error::NoRows { report_format: format });
        }
        Ok(())
    }

    ///
    /// Parses a gas column value.
    ///
    fn parse_gas_cost(
        function_name: &str,
        column: &'static str,
        value: &str,
    ) -> Result<u64, Error> {
        value.parse::<u64>().map_err(|error| Error::InvalidGasCost {
            function_name: function_name.to_owned(),
            column,
            value: value.to_owned(),
            error,
        })
    }
}
