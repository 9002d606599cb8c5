use serde_derive::{Deserialize, Serialize};

use crate::ext::standard_limits::ADULT_DAILY_LIMITS;

use super::{daily_intake::Nutrient, daily_limit::DailyLimits};

/// Maps a nutrient label to a bucket when the label contains `keyword`
/// (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientRule {
    pub keyword: String,
    pub nutrient: Nutrient,
}

impl NutrientRule {
    pub fn new(keyword: impl Into<String>, nutrient: Nutrient) -> Self {
        Self {
            keyword: keyword.into(),
            nutrient,
        }
    }
}

/// Classification rules and categorical thresholds.
///
/// The defaults are product policy values, not regulatory limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakePolicy {
    /// Ordered; the first matching rule wins.
    pub nutrient_rules: Vec<NutrientRule>,
    /// An artificial flavor counts as a sweetener if it contains any of these.
    pub sweetener_keywords: Vec<String>,
    /// Warn when the color count is strictly greater than this.
    pub artificial_color_threshold: usize,
    /// Warn when the preservative count is strictly greater than this.
    pub preservative_threshold: usize,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            nutrient_rules: vec![
                NutrientRule::new("caffeine", Nutrient::Caffeine),
                NutrientRule::new("sodium", Nutrient::Sodium),
                NutrientRule::new("sugar", Nutrient::AddedSugars),
            ],
            sweetener_keywords: vec!["aspartame".into(), "sucralose".into()],
            artificial_color_threshold: 3,
            preservative_threshold: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub limits: DailyLimits,
    pub policy: IntakePolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            limits: ADULT_DAILY_LIMITS.clone(),
            policy: IntakePolicy::default(),
        }
    }
}
