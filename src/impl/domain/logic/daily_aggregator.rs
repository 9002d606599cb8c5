use crate::entities::{AnalysisData, AnalysisRecord, DailyIntakeTotal, IntakePolicy, Nutrient};

use super::{amount_extractor::extract_amount, day_window::DayWindow};

pub struct DailyAggregator<'a> {
    policy: &'a IntakePolicy,
}

impl<'a> DailyAggregator<'a> {
    pub fn new(policy: &'a IntakePolicy) -> Self {
        Self { policy }
    }

    /// Records owned by the window, in their original order.
    pub fn records_in<'r>(
        &self,
        records: &'r [AnalysisRecord],
        window: &DayWindow,
    ) -> Vec<&'r AnalysisRecord> {
        records
            .iter()
            .filter(|r| window.contains(r.timestamp))
            .collect()
    }

    pub fn aggregate(
        &self,
        records: &[AnalysisRecord],
        window: &DayWindow,
    ) -> DailyIntakeTotal {
        let mut acc = IntakeAccumulator::default();
        for record in self.records_in(records, window) {
            self.accumulate(&mut acc, &record.analysis_data);
        }
        acc.finish()
    }

    fn accumulate(&self, acc: &mut IntakeAccumulator, data: &AnalysisData) {
        for concern in &data.nutritional_concerns {
            if let Some(nutrient) = self.classify(&concern.nutrient) {
                acc.amounts[nutrient as usize].push(extract_amount(&concern.amount));
            }
        }
        acc.artificial_colors += data.artificial_colors.len();
        acc.preservatives += data.preservatives.len();
        acc.artificial_sweeteners += data
            .artificial_flavors
            .iter()
            .filter(|flavor| self.is_sweetener(flavor))
            .count();
    }

    /// First matching rule wins; unknown labels contribute nothing.
    fn classify(&self, label: &str) -> Option<Nutrient> {
        let label = label.to_lowercase();
        self.policy
            .nutrient_rules
            .iter()
            .find(|rule| label.contains(&rule.keyword.to_lowercase()))
            .map(|rule| rule.nutrient)
    }

    fn is_sweetener(&self, flavor: &str) -> bool {
        let flavor = flavor.to_lowercase();
        self.policy
            .sweetener_keywords
            .iter()
            .any(|keyword| flavor.contains(&keyword.to_lowercase()))
    }
}

/// Per-call scratch state. Amounts are kept individually and summed in sorted
/// order so the result does not depend on record order, even for fractional
/// amounts.
#[derive(Default)]
struct IntakeAccumulator {
    amounts: [Vec<f64>; 3],
    artificial_sweeteners: usize,
    artificial_colors: usize,
    preservatives: usize,
}

impl IntakeAccumulator {
    fn finish(mut self) -> DailyIntakeTotal {
        let mut total = DailyIntakeTotal {
            artificial_sweetener_count: self.artificial_sweeteners,
            artificial_color_count: self.artificial_colors,
            preservative_count: self.preservatives,
            ..Default::default()
        };
        for nutrient in Nutrient::ALL {
            let amounts = &mut self.amounts[nutrient as usize];
            amounts.sort_by(f64::total_cmp);
            *total.nutrient_mut(nutrient) = amounts.iter().fold(0.0, |sum, a| sum + a);
        }
        total
    }
}
