//!
//! Foundry contract gas report.
//!

pub mod function;

use std::collections::BTreeMap;

use self::function::FunctionReport;

///
/// Foundry contract gas report.
///
#[derive(Debug, serde::Deserialize)]
pub struct ContractReport {
    /// Per-function measurements, keyed by function name or signature.
    pub functions: BTreeMap<String, FunctionReport>,
}
