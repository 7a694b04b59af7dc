//! Categorical filter selections: a concrete value, or the "All" sentinel.

use std::str::FromStr;

use crate::types::ValuationMethod;

/// The sentinel option meaning "no restriction".
pub const ALL: &str = "All";

/// Method options offered to the user. Static, so methods with no posts
/// are still selectable.
pub const METHOD_OPTIONS: [&str; 5] = [ALL, "DCF", "Multiples", "SOTP", "Other"];

/// Sector selection. Any string other than `"All"` selects that exact sector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SectorChoice {
    #[default]
    All,
    Sector(String),
}

impl SectorChoice {
    pub fn as_str(&self) -> &str {
        match self {
            SectorChoice::All => ALL,
            SectorChoice::Sector(s) => s.as_str(),
        }
    }
}

impl From<&str> for SectorChoice {
    fn from(s: &str) -> Self {
        if s == ALL {
            SectorChoice::All
        } else {
            SectorChoice::Sector(s.to_string())
        }
    }
}

impl std::fmt::Display for SectorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Method selection over the closed method enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MethodChoice {
    #[default]
    All,
    Method(ValuationMethod),
}

impl MethodChoice {
    pub fn as_str(&self) -> &str {
        match self {
            MethodChoice::All => ALL,
            MethodChoice::Method(m) => m.as_str(),
        }
    }
}

/// Parses one of [`METHOD_OPTIONS`]. Anything else is rejected rather than
/// turned into a filter that can never match.
impl FromStr for MethodChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(MethodChoice::All);
        }
        match ValuationMethod::from(s.to_string()) {
            ValuationMethod::Unrecognized(_) => Err(()),
            method => Ok(MethodChoice::Method(method)),
        }
    }
}

impl std::fmt::Display for MethodChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_sentinel() {
        assert_eq!(SectorChoice::from("All"), SectorChoice::All);
        assert_eq!(
            SectorChoice::from("all"),
            SectorChoice::Sector("all".to_string())
        );
    }

    #[test]
    fn every_method_option_parses() {
        for option in METHOD_OPTIONS {
            let choice: MethodChoice = option.parse().unwrap();
            assert_eq!(choice.as_str(), option);
        }
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!("EV/EBITDA".parse::<MethodChoice>().is_err());
        assert!("".parse::<MethodChoice>().is_err());
    }
}
