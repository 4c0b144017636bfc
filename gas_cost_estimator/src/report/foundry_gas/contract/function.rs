//!
//! Foundry function gas report.
//!

///
/// Foundry function gas report.
///
#[derive(Debug, serde::Deserialize)]
pub struct FunctionReport {
    /// Minimum gas cost.
    #[serde(default)]
    pub min: u64,
    /// Mean gas cost.
    pub mean: u64,
}
