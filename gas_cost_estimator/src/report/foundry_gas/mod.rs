//!
//! Foundry JSON gas report format.
//!

pub mod contract;

use self::contract::ContractReport;

///
/// Foundry JSON gas report format.
///
#[derive(Debug, serde::Deserialize)]
pub struct FoundryGasReport(pub Vec<ContractReport>);
