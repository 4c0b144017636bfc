//!
//! The gas cost calculator.
//!

pub mod chain;
pub mod record;

#[cfg(test)]
mod tests;

use crate::report::row::Row;
use crate::report::GasReport;

use self::chain::ChainPricing;
use self::record::CostRecord;

///
/// The gas cost calculator.
///
#[derive(Debug, Clone, Copy)]
pub struct Calculator {
    /// The base chain pricing.
    pub base: ChainPricing,
    /// The rollup pricing.
    pub rollup: ChainPricing,
}

impl Calculator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(base: ChainPricing, rollup: ChainPricing) -> Self {
        Self { base, rollup }
    }

    ///
    /// Computes one record per report row, in report order.
    ///
    pub fn calculate(&self, report: &GasReport) -> Vec<CostRecord> {
        report.rows.iter().map(|row| self.record(row)).collect()
    }

    ///
    /// Computes the record of a single row, charging its average gas cost.
    ///
    pub fn record(&self, row: &Row) -> CostRecord {
        let amount = row.avg;
        CostRecord {
            function_name: row.function_name.clone(),
            amount,
            total_cost_eth_eth: CostRecord::format_cost(self.base.native_cost(amount)),
            total_cost_eth_usd: CostRecord::format_cost(self.base.fiat_cost(amount)),
            total_cost_opt_eth: CostRecord::format_cost(self.rollup.native_cost(amount)),
            total_cost_opt_usd: CostRecord::format_cost(self.rollup.fiat_cost(amount)),
        }
    }
}
