use std::fmt;

use serde::{Deserialize as _, Deserializer};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a saved record, stable for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

/// One saved product: the externally produced analysis plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: RecordId,
    pub name: String,
    /// Epoch milliseconds at which the product was logged.
    pub timestamp: i64,
    #[serde(default)]
    pub analysis_data: AnalysisData,
}

impl AnalysisRecord {
    pub fn new(name: impl Into<String>, timestamp: i64, analysis_data: AnalysisData) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            timestamp,
            analysis_data,
        }
    }
}

// Analysis payload.
// ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub nutritional_concerns: Vec<NutritionalConcern>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub artificial_colors: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub artificial_flavors: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub preservatives: Vec<String>,

    // Carried for display and round-tripping only; the intake core ignores
    // everything below.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ingredients: Vec<IngredientAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub common_additives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_reasoning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calories: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalConcern {
    #[serde(default)]
    pub nutrient: String,
    /// Free text, e.g. "120mg", "≈45 g" or "high".
    #[serde(default)]
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_value_percentage: Option<f64>,
    #[serde(default)]
    pub concern: String,
}

impl NutritionalConcern {
    pub fn new(nutrient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            nutrient: nutrient.into(),
            amount: amount.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" | "moderate" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAssessment {
    #[serde(default)]
    pub ingredient: String,
    /// Absent or unrecognized levels read as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_risk_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub health_impacts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_additives: Option<Vec<String>>,
    /// Qualitative estimate, e.g. "high", "moderate", "trace".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_intake_impact: Option<String>,
}

// Score rating.
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    Good,
    Fair,
    Poor,
}

impl AnalysisData {
    pub fn score_rating(&self) -> Option<ScoreRating> {
        self.overall_score.map(|score| {
            if score >= 70.0 {
                ScoreRating::Good
            } else if score >= 50.0 {
                ScoreRating::Fair
            } else {
                ScoreRating::Poor
            }
        })
    }
}

/// Absent and `null` sequences both mean "empty".
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Case-insensitive; any other shape or value is `None` rather than an error.
fn lenient_risk_level<'de, D>(deserializer: D) -> Result<Option<RiskLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => RiskLevel::parse_lenient(&s),
        _ => None,
    })
}
