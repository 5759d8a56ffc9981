use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Automation,
    Performance,
    Security,
    Cicd,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Automation,
        Category::Performance,
        Category::Security,
        Category::Cicd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Automation => "automation",
            Category::Performance => "performance",
            Category::Security => "security",
            Category::Cicd => "cicd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Automation => "Automation",
            Category::Performance => "Performance",
            Category::Security => "Security",
            Category::Cicd => "CI/CD",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}` (use automation|performance|security|cicd)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "automation" => Ok(Category::Automation),
            "performance" => Ok(Category::Performance),
            "security" => Ok(Category::Security),
            "cicd" => Ok(Category::Cicd),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
