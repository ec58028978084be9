use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: String,
    pub max: String,
    pub average: String,
}

/// AI summary panel payload. Opaque to the sequencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub recommendation: String,
    #[serde(default)]
    pub key_insights: Vec<String>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub top_brands: Vec<String>,
    #[serde(default)]
    pub considerations: Vec<String>,
}
