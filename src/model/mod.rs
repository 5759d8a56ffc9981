use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod category;
pub mod tiers;

pub use category::Category;
pub use tiers::ScoreTier;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single answered sub-criterion: a capability checkbox or a 1-4 DORA
/// maturity rating (0 when the rating was left unanswered).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Scale(u8),
}

pub type Breakdown = BTreeMap<String, AnswerValue>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub category: Category,
    pub date: NaiveDate,
    pub score: f64,
    #[serde(default)]
    pub breakdown: Breakdown,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub tool_suggestions: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewScorecard {
    pub product_id: i64,
    pub category: Category,
    pub date: NaiveDate,
    pub breakdown: Breakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_suggestions: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScorecardFilter {
    pub product_id: Option<i64>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
}
