use serde::{Deserialize, Serialize};

/// Valuation summary attached to every post.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub method: ValuationMethod,

    /// Intrinsic value per share. May be negative.
    pub base: f64,

    /// Market price per share.
    pub current: f64,

    /// Upside as authored in the document. Not recomputed from `base` and `current`.
    pub upside_pct: f64,
}

/// The analytical approach behind a valuation.
///
/// Documents are not validated on load, so a method outside the four known
/// names is kept verbatim in [`ValuationMethod::Unrecognized`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ValuationMethod {
    Dcf,
    Multiples,
    Sotp,
    Other,
    Unrecognized(String),
}

impl ValuationMethod {
    /// The four methods a post is expected to carry, in display order.
    pub const KNOWN: [ValuationMethod; 4] = [
        ValuationMethod::Dcf,
        ValuationMethod::Multiples,
        ValuationMethod::Sotp,
        ValuationMethod::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ValuationMethod::Dcf => "DCF",
            ValuationMethod::Multiples => "Multiples",
            ValuationMethod::Sotp => "SOTP",
            ValuationMethod::Other => "Other",
            ValuationMethod::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ValuationMethod::Unrecognized(_))
    }

    /// Text stand-in for the chip icon shown next to the method name.
    pub fn glyph(&self) -> &'static str {
        match self {
            ValuationMethod::Dcf => "calculator",
            ValuationMethod::Multiples => "chart",
            _ => "trend",
        }
    }
}

impl From<String> for ValuationMethod {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "DCF" => ValuationMethod::Dcf,
            "Multiples" => ValuationMethod::Multiples,
            "SOTP" => ValuationMethod::Sotp,
            "Other" => ValuationMethod::Other,
            _ => ValuationMethod::Unrecognized(raw),
        }
    }
}

impl From<ValuationMethod> for String {
    fn from(method: ValuationMethod) -> Self {
        match method {
            ValuationMethod::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
