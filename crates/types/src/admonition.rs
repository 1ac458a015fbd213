//! The closed set of callout types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown admonition type: '{0}'")]
pub struct UnknownAdmonitionKind(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdmonitionKind {
    #[serde(alias = "note")]
    Note,
    #[serde(alias = "tip")]
    Tip,
    #[serde(alias = "important")]
    Important,
    #[serde(alias = "warning")]
    Warning,
    #[serde(alias = "caution")]
    Caution,
}

impl AdmonitionKind {
    pub const ALL: [AdmonitionKind; 5] = [
        AdmonitionKind::Note,
        AdmonitionKind::Tip,
        AdmonitionKind::Important,
        AdmonitionKind::Warning,
        AdmonitionKind::Caution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdmonitionKind::Note => "NOTE",
            AdmonitionKind::Tip => "TIP",
            AdmonitionKind::Important => "IMPORTANT",
            AdmonitionKind::Warning => "WARNING",
            AdmonitionKind::Caution => "CAUTION",
        }
    }
}

impl fmt::Display for AdmonitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdmonitionKind {
    type Err = UnknownAdmonitionKind;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdmonitionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAdmonitionKind(s.to_string()))
    }
}
