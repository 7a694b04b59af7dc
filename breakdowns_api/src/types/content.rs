use serde::{Deserialize, Serialize};

/// Body of a write-up. Everything but the thesis is optional and an absent
/// field means the corresponding section is simply not shown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub thesis: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalysts: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcf: Option<DcfSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiples: Option<Multiples>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_metrics: Option<Vec<QuickMetric>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DcfSnapshot {
    /// Percent.
    pub wacc: f64,

    /// Percent.
    pub terminal_growth: f64,

    /// Millions of shares.
    pub shares_out: f64,

    pub base_fcf_next_yr: f64,

    /// Percent.
    pub fcf_cagr5y: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Multiples {
    pub peers: Vec<PeerMultiple>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_multiple_note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PeerMultiple {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    pub metric: String,

    pub value: f64,
}

/// Label and pre-formatted display value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuickMetric {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}
