use serde_derive::{Deserialize, Serialize};

/// Quantities summed from free-text amounts, each in its canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nutrient {
    Caffeine,
    Sodium,
    AddedSugars,
}

impl Nutrient {
    /// Canonical evaluation and warning order.
    pub const ALL: [Nutrient; 3] = [Nutrient::Caffeine, Nutrient::Sodium, Nutrient::AddedSugars];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Caffeine => "Caffeine",
            Nutrient::Sodium => "Sodium",
            Nutrient::AddedSugars => "Added sugars",
        }
    }
}

/// Keys of the daily limit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrackedQuantity {
    Caffeine,
    Sodium,
    AddedSugars,
    ArtificialSweeteners,
}

impl From<Nutrient> for TrackedQuantity {
    fn from(n: Nutrient) -> Self {
        match n {
            Nutrient::Caffeine => TrackedQuantity::Caffeine,
            Nutrient::Sodium => TrackedQuantity::Sodium,
            Nutrient::AddedSugars => TrackedQuantity::AddedSugars,
        }
    }
}

/// Intake for one calendar day. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyIntakeTotal {
    pub caffeine: f64,
    pub sodium: f64,
    pub added_sugars: f64,
    pub artificial_sweetener_count: usize,
    pub artificial_color_count: usize,
    pub preservative_count: usize,
}

impl DailyIntakeTotal {
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Caffeine => self.caffeine,
            Nutrient::Sodium => self.sodium,
            Nutrient::AddedSugars => self.added_sugars,
        }
    }

    pub(crate) fn nutrient_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Caffeine => &mut self.caffeine,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::AddedSugars => &mut self.added_sugars,
        }
    }

    pub fn additive_count(&self) -> usize {
        self.artificial_color_count + self.preservative_count
    }
}
