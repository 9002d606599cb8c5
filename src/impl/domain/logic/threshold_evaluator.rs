use log::warn;

use crate::entities::{
    DailyIntakeTotal, DailyLimits, IntakeEvaluation, IntakeLevel, IntakePolicy, IntakeWarning,
    Nutrient, QuantityStatus,
};

pub struct ThresholdEvaluator<'a> {
    limits: &'a DailyLimits,
    policy: &'a IntakePolicy,
}

impl<'a> ThresholdEvaluator<'a> {
    pub fn new(limits: &'a DailyLimits, policy: &'a IntakePolicy) -> Self {
        Self { limits, policy }
    }

    /// Warnings come out in a fixed order: caffeine, sodium, added sugars,
    /// artificial colors, preservatives.
    pub fn evaluate(&self, total: &DailyIntakeTotal) -> IntakeEvaluation {
        let mut quantities = Vec::new();
        let mut warnings = Vec::new();

        for nutrient in Nutrient::ALL {
            let Some(limit) = self.limits.get(nutrient.into()) else {
                warn!("No daily limit configured for {:?}; skipping.", nutrient);
                continue;
            };
            if !(limit.limit > 0.0) {
                warn!(
                    "Daily limit for {:?} is not positive ({}); skipping.",
                    nutrient, limit.limit
                );
                continue;
            }

            let amount = total.nutrient(nutrient);
            let ratio_percentage = amount / limit.limit * 100.0;
            quantities.push(QuantityStatus {
                nutrient,
                total: amount,
                limit: limit.clone(),
                percentage: display_percentage(ratio_percentage),
                level: IntakeLevel::from_percentage(ratio_percentage),
            });
            // Unclamped comparison; the display percentage saturates at 100.
            if amount > limit.limit {
                warnings.push(IntakeWarning::LimitExceeded {
                    nutrient,
                    total: amount,
                    limit: limit.clone(),
                });
            }
        }

        if total.artificial_color_count > self.policy.artificial_color_threshold {
            warnings.push(IntakeWarning::ArtificialColors {
                count: total.artificial_color_count,
            });
        }
        if total.preservative_count > self.policy.preservative_threshold {
            warnings.push(IntakeWarning::Preservatives {
                count: total.preservative_count,
            });
        }

        IntakeEvaluation {
            quantities,
            warnings,
        }
    }
}

fn display_percentage(ratio_percentage: f64) -> f64 {
    ratio_percentage.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DailyLimit, TrackedQuantity, TrackerConfig};

    fn evaluate(total: DailyIntakeTotal) -> IntakeEvaluation {
        let config = TrackerConfig::default();
        ThresholdEvaluator::new(&config.limits, &config.policy).evaluate(&total)
    }

    #[test]
    fn all_zero_total_yields_no_warnings() {
        let eval = evaluate(DailyIntakeTotal::default());
        assert!(eval.warnings.is_empty());
        assert_eq!(eval.quantities.len(), 3);
        assert!(eval.quantities.iter().all(|q| q.percentage == 0.0));
        assert!(eval.quantities.iter().all(|q| q.level == IntakeLevel::Low));
    }

    #[test]
    fn over_limit_clamps_display_but_warns() {
        let eval = evaluate(DailyIntakeTotal {
            caffeine: 420.0,
            ..Default::default()
        });
        let caffeine = &eval.quantities[0];
        assert_eq!(caffeine.nutrient, Nutrient::Caffeine);
        assert_eq!(caffeine.percentage, 100.0);
        assert_eq!(caffeine.level, IntakeLevel::Exceeded);
        assert_eq!(eval.warnings.len(), 1);
        assert_eq!(
            eval.warnings[0].to_string(),
            "Caffeine intake (420mg) exceeds FDA daily limit of 400mg"
        );
    }

    #[test]
    fn exactly_at_limit_does_not_warn() {
        let eval = evaluate(DailyIntakeTotal {
            sodium: 2300.0,
            ..Default::default()
        });
        assert!(eval.warnings.is_empty());
        assert_eq!(eval.quantities[1].percentage, 100.0);
        assert_eq!(eval.quantities[1].level, IntakeLevel::High);
    }

    #[test]
    fn warnings_follow_fixed_order() {
        let eval = evaluate(DailyIntakeTotal {
            caffeine: 500.0,
            sodium: 3000.0,
            added_sugars: 51.0,
            artificial_sweetener_count: 9,
            artificial_color_count: 4,
            preservative_count: 6,
        });
        let messages: Vec<String> = eval.warnings.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Caffeine intake (500mg) exceeds FDA daily limit of 400mg",
                "Sodium intake (3000mg) exceeds WHO daily limit of 2300mg",
                "Added sugars (51g) exceed WHO daily limit of 50g",
                "High artificial color exposure (4 colors today)",
                "High preservative exposure (6 preservatives today)",
            ]
        );
    }

    #[test]
    fn subset_of_conditions_keeps_relative_order() {
        let eval = evaluate(DailyIntakeTotal {
            added_sugars: 80.0,
            preservative_count: 6,
            artificial_color_count: 3,
            ..Default::default()
        });
        assert!(matches!(
            eval.warnings.as_slice(),
            [
                IntakeWarning::LimitExceeded {
                    nutrient: Nutrient::AddedSugars,
                    ..
                },
                IntakeWarning::Preservatives { count: 6 },
            ]
        ));
    }

    #[test]
    fn missing_or_unusable_limit_skips_quantity() {
        let config = TrackerConfig::default();
        let limits = config
            .limits
            .clone()
            .without(TrackedQuantity::Caffeine)
            .with(TrackedQuantity::Sodium, DailyLimit::new(0.0, "mg", "WHO"));
        let eval = ThresholdEvaluator::new(&limits, &config.policy).evaluate(&DailyIntakeTotal {
            caffeine: 1000.0,
            sodium: 1000.0,
            ..Default::default()
        });
        assert!(eval.warnings.is_empty());
        assert_eq!(eval.quantities.len(), 1);
        assert_eq!(eval.quantities[0].nutrient, Nutrient::AddedSugars);
    }

    #[test]
    fn limit_table_changes_need_no_code_changes() {
        let config = TrackerConfig::default();
        let limits = config
            .limits
            .clone()
            .with(TrackedQuantity::Caffeine, DailyLimit::new(100.0, "mg", "AAP"));
        let eval = ThresholdEvaluator::new(&limits, &config.policy).evaluate(&DailyIntakeTotal {
            caffeine: 150.0,
            ..Default::default()
        });
        assert_eq!(
            eval.warnings[0].to_string(),
            "Caffeine intake (150mg) exceeds AAP daily limit of 100mg"
        );
    }
}
