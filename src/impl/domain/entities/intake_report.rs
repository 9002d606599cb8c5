use std::fmt;

use chrono::NaiveDate;

use super::{
    daily_intake::{DailyIntakeTotal, Nutrient},
    daily_limit::DailyLimit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntakeLevel {
    Low,
    Moderate,
    High,
    Exceeded,
}

impl IntakeLevel {
    /// Classifies an unclamped percentage of the daily limit.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 100.0 {
            IntakeLevel::Exceeded
        } else if percentage > 75.0 {
            IntakeLevel::High
        } else if percentage > 50.0 {
            IntakeLevel::Moderate
        } else {
            IntakeLevel::Low
        }
    }
}

/// Evaluation of one nutrient against its configured limit.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityStatus {
    pub nutrient: Nutrient,
    pub total: f64,
    pub limit: DailyLimit,
    /// Clamped to `[0, 100]`; for progress display only.
    pub percentage: f64,
    pub level: IntakeLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeWarning {
    LimitExceeded {
        nutrient: Nutrient,
        total: f64,
        limit: DailyLimit,
    },
    ArtificialColors {
        count: usize,
    },
    Preservatives {
        count: usize,
    },
}

impl fmt::Display for IntakeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeWarning::LimitExceeded {
                nutrient,
                total,
                limit,
            } => {
                let (subject, verb) = match nutrient {
                    Nutrient::Caffeine => ("Caffeine intake", "exceeds"),
                    Nutrient::Sodium => ("Sodium intake", "exceeds"),
                    Nutrient::AddedSugars => ("Added sugars", "exceed"),
                };
                write!(
                    f,
                    "{} ({}{}) {} {} daily limit of {}{}",
                    subject, total, limit.unit, verb, limit.source, limit.limit, limit.unit
                )
            }
            IntakeWarning::ArtificialColors { count } => write!(
                f,
                "High artificial color exposure ({} color{} today)",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            IntakeWarning::Preservatives { count } => write!(
                f,
                "High preservative exposure ({} preservative{} today)",
                count,
                if *count == 1 { "" } else { "s" }
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntakeEvaluation {
    /// In `Nutrient::ALL` order; nutrients without a usable limit are omitted.
    pub quantities: Vec<QuantityStatus>,
    pub warnings: Vec<IntakeWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyIntakeReport {
    pub date: NaiveDate,
    pub product_count: usize,
    pub total: DailyIntakeTotal,
    pub quantities: Vec<QuantityStatus>,
    pub warnings: Vec<IntakeWarning>,
}

impl DailyIntakeReport {
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}
