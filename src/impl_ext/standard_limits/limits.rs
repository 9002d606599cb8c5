use crate::entities::{DailyLimit, DailyLimits, TrackedQuantity};
use std::sync::LazyLock;

/// Adult limits: FDA caffeine, WHO sodium and added sugars, FDA sweetener ADI.
pub static ADULT_DAILY_LIMITS: LazyLock<DailyLimits> = LazyLock::new(|| {
    [
        (TrackedQuantity::Caffeine, DailyLimit::new(400.0, "mg", "FDA")),
        (TrackedQuantity::Sodium, DailyLimit::new(2300.0, "mg", "WHO")),
        (TrackedQuantity::AddedSugars, DailyLimit::new(50.0, "g", "WHO")),
        (
            TrackedQuantity::ArtificialSweeteners,
            DailyLimit::new(40.0, "mg/kg body weight", "FDA (ADI)"),
        ),
    ]
    .into_iter()
    .collect()
});

/// Same as the adult table with caffeine capped at 100mg.
pub static ADOLESCENT_DAILY_LIMITS: LazyLock<DailyLimits> = LazyLock::new(|| {
    ADULT_DAILY_LIMITS
        .clone()
        .with(TrackedQuantity::Caffeine, DailyLimit::new(100.0, "mg", "FDA"))
});
