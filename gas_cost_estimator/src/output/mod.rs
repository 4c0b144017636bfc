//!
//! The cost report output.
//!

#[cfg(test)]
mod tests;

use std::path::Path;

use serde::Serialize;

use crate::cost::record::CostRecord;

///
/// The cost report output.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CostReport {
    /// The records in report order.
    pub records: Vec<CostRecord>,
}

impl CostReport {
    /// The default output path.
    pub const DEFAULT_OUTPUT_PATH: &'static str = "calculated_costs.json";

    /// The JSON indentation.
    pub const INDENT: &'static [u8] = b"    ";

    ///
    /// Serializes the records as a pretty-printed JSON array.
    ///
    pub fn to_json(&self) -> String {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(Self::INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.records
            .serialize(&mut serializer)
            .expect("Always valid");
        String::from_utf8(buffer).expect("Always valid")
    }

    ///
    /// Writes the report to a file, overwriting it.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json())
            .map_err(|error| anyhow::anyhow!("Cost report file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl From<Vec<CostRecord>> for CostReport {
    fn from(records: Vec<CostRecord>) -> Self {
        Self { records }
    }
}

impl TryFrom<&Path> for CostReport {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Cost report file {path:?} reading: {error}"))?;
        let records: Vec<CostRecord> = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Cost report file {path:?} parsing: {error}"))?;
        Ok(Self { records })
    }
}
