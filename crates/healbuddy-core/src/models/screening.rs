use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The screening instruments HealBuddy can administer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScreeningKind {
    #[serde(rename = "PHQ-9")]
    Phq9,
    #[serde(rename = "GAD-7")]
    Gad7,
    #[serde(rename = "GHQ")]
    Ghq,
}

impl ScreeningKind {
    pub const ALL: [ScreeningKind; 3] = [
        ScreeningKind::Phq9,
        ScreeningKind::Gad7,
        ScreeningKind::Ghq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningKind::Phq9 => "PHQ-9",
            ScreeningKind::Gad7 => "GAD-7",
            ScreeningKind::Ghq => "GHQ",
        }
    }
}

impl fmt::Display for ScreeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreeningKind {
    type Err = CoreError;

    /// Only the canonical tokens are accepted. "PHQ9" (missing hyphen) is
    /// an unknown kind, not a fuzzy match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHQ-9" => Ok(ScreeningKind::Phq9),
            "GAD-7" => Ok(ScreeningKind::Gad7),
            "GHQ" => Ok(ScreeningKind::Ghq),
            other => Err(CoreError::UnknownScreeningKind(other.to_string())),
        }
    }
}
