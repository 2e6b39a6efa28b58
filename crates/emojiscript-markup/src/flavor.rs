//! Output flavor selection.

use serde::{Deserialize, Serialize};

/// Rendering variant. `TypeScript` adds type annotations read from
/// attributes (`type`, `returns`); the output is otherwise identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    JavaScript,
    TypeScript,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::JavaScript => "javascript",
            Flavor::TypeScript => "typescript",
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Flavor::TypeScript)
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Flavor {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            _ => Err(format!("unknown flavor: {s}")),
        }
    }
}
