// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod config_ron_datasource;
        pub(crate) mod records_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod analysis_record;
        pub(crate) mod analyzer;
        pub(crate) mod daily_intake;
        pub(crate) mod daily_limit;
        pub(crate) mod intake_policy;
        pub(crate) mod intake_report;
    }
    pub(crate) mod logic {
        pub(crate) mod amount_extractor;
        pub(crate) mod daily_aggregator;
        pub(crate) mod day_window;
        pub(crate) mod threshold_evaluator;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod tracking_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod report_printer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::analysis_record::*;
        pub use crate::domain::entities::analyzer::*;
        pub use crate::domain::entities::daily_intake::*;
        pub use crate::domain::entities::daily_limit::*;
        pub use crate::domain::entities::intake_policy::*;
        pub use crate::domain::entities::intake_report::*;
    }

    pub mod logic {
        pub use crate::domain::logic::amount_extractor::extract_amount;
        pub use crate::domain::logic::daily_aggregator::DailyAggregator;
        pub use crate::domain::logic::day_window::DayWindow;
        pub use crate::domain::logic::threshold_evaluator::ThresholdEvaluator;
    }

    pub mod repositories {
        pub use crate::data::repositories::records_repository_impl::{
            InMemoryRecordsRepository, JsonFileRecordsRepository,
        };
        pub use crate::domain::repositories::records_repository::RecordsRepository;
    }
}
