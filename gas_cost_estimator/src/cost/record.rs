//!
//! The per-function cost record.
//!

///
/// The per-function cost record.
///
/// The field names and the fixed-point string encoding of the costs are the persisted
/// format read by downstream tooling.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CostRecord {
    /// The function name.
    pub function_name: String,
    /// The average gas cost.
    pub amount: u64,
    /// The base chain cost in native tokens.
    pub total_cost_eth_eth: String,
    /// The base chain cost in fiat.
    pub total_cost_eth_usd: String,
    /// The rollup cost in native tokens.
    pub total_cost_opt_eth: String,
    /// The rollup cost in fiat.
    pub total_cost_opt_usd: String,
}

impl CostRecord {
    /// The number of digits after the decimal point.
    pub const DECIMALS: usize = 8;

    ///
    /// Renders a cost as a fixed-point decimal string.
    ///
    pub fn format_cost(cost: f64) -> String {
        format!("{cost:.precision$}", precision = Self::DECIMALS)
    }
}
