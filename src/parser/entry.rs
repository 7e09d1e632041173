use serde::{Deserialize, Serialize};

/// One ranked row extracted from the report (or supplied by the curated
/// fallback dataset). Ranks are not stored here: they are recomputed on
/// every merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    pub name: String,

    /// Consolidated assets in millions of USD (the shared unit).
    pub assets_millions: u64,
}

impl BankEntry {
    pub fn new(name: impl Into<String>, assets_millions: u64) -> Self {
        Self {
            name: name.into(),
            assets_millions,
        }
    }
}
