use std::fs;

use ron::from_str;

use crate::{entities::TrackerConfig, errors::TrackerError};

pub(crate) trait ConfigRonDatasource {
    fn from_string(&self, s: &str) -> Result<TrackerConfig, TrackerError>;

    fn from_file<P>(&self, path: P) -> Result<TrackerConfig, TrackerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ConfigRonDatasourceImpl;

impl ConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ConfigRonDatasource for ConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<TrackerConfig, TrackerError> {
        from_str(s).map_err(|e| TrackerError::invalid_ron("TrackerConfig", &e))
    }

    fn from_file<P>(&self, path: P) -> Result<TrackerConfig, TrackerError>
    where
        P: AsRef<std::path::Path>,
    {
        let path = path.as_ref();
        self.from_string(&fs::read_to_string(path).map_err(|e| TrackerError::read(path, e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DailyLimit, IntakePolicy, Nutrient, TrackedQuantity};

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let config = ConfigRonDatasourceImpl::new()
            .from_string("(policy: (artificial_color_threshold: 2))")
            .unwrap();
        assert_eq!(config.policy.artificial_color_threshold, 2);
        assert_eq!(config.policy.preservative_threshold, 5);
        assert_eq!(
            config.limits.get(TrackedQuantity::Caffeine),
            Some(&DailyLimit::new(400.0, "mg", "FDA"))
        );
    }

    #[test]
    fn limits_table_replaces_defaults_when_given() {
        let config = ConfigRonDatasourceImpl::new()
            .from_string(
                r#"(
                    limits: {
                        Caffeine: (limit: 100.0, unit: "mg", source: "AAP"),
                        Sodium: (limit: 1500.0, unit: "mg", source: "AHA"),
                    },
                    policy: (
                        nutrient_rules: [
                            (keyword: "caffeine", nutrient: Caffeine),
                            (keyword: "salt", nutrient: Sodium),
                        ],
                    ),
                )"#,
            )
            .unwrap();
        assert_eq!(config.limits.0.len(), 2);
        assert_eq!(config.limits.get(TrackedQuantity::AddedSugars), None);
        assert_eq!(config.policy.nutrient_rules[1].nutrient, Nutrient::Sodium);
        assert_eq!(
            config.policy.sweetener_keywords,
            IntakePolicy::default().sweetener_keywords
        );
    }

    #[test]
    fn invalid_ron_is_reported() {
        let err = ConfigRonDatasourceImpl::new()
            .from_string("(limits: [")
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidRon { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ConfigRonDatasourceImpl::new()
            .from_file("/nonexistent/intake.ron")
            .unwrap_err();
        assert!(matches!(err, TrackerError::ReadError { .. }));
    }
}
