//! Target languages for SDK generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for SDK generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Go
    Go,
    /// Node.js (TypeScript sources)
    NodeJs,
    /// Python
    Python,
    /// .NET (C#)
    DotNet,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 4] = [
        Language::Go,
        Language::NodeJs,
        Language::Python,
        Language::DotNet,
    ];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::NodeJs => "nodejs",
            Language::Python => "python",
            Language::DotNet => "dotnet",
        }
    }

    /// Alternative identifiers accepted on the command line and in option
    /// sections.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Language::Go => &["golang"],
            Language::NodeJs => &["node", "ts", "typescript"],
            Language::Python => &["py"],
            Language::DotNet => &["csharp", "cs"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == lower || lang.aliases().contains(&lower.as_str()))
            .ok_or_else(|| {
                format!(
                    "unknown language '{}', expected one of: go, nodejs, python, dotnet",
                    s
                )
            })
    }
}
