use serde::{Deserialize, Serialize};

/// Envelope of the paged endpoints (search keywords, referrals, keyword competitors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PagedData<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub results_count: Option<i64>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchTerm {
    pub search_term: String,
    pub visits: f64,
    #[serde(default)]
    pub change: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReferringSite {
    pub site: String,
    pub visits: f64,
    #[serde(default)]
    pub change: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompetitorDomain {
    pub domain: String,
    pub score: f64,
}
