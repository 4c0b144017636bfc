//!
//! A single function row of the gas report.
//!

///
/// A single function row of the gas report.
///
/// Function names are not unique: the same name may appear once per contract.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The function name.
    pub function_name: String,
    /// The minimum gas cost.
    pub min: u64,
    /// The average gas cost.
    pub avg: u64,
}

impl Row {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(function_name: String, min: u64, avg: u64) -> Self {
        Self {
            function_name,
            min,
            avg,
        }
    }
}
