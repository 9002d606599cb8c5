use std::str::FromStr as _;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone};
use log::{debug, warn};

use crate::{
    data::models::iso_date_model::ISODateModel,
    domain::{
        logic::{
            daily_aggregator::DailyAggregator, day_window::DayWindow,
            threshold_evaluator::ThresholdEvaluator,
        },
        repositories::records_repository::RecordsRepository,
    },
    entities::{
        AnalysisData, AnalysisRecord, DailyIntakeReport, IngredientAnalyzer, RecordId,
        TrackerConfig,
    },
    errors::TrackerError,
};

#[async_trait]
pub trait TrackingUsecase: Send + Sync {
    async fn daily_report(&self, date: &str) -> Result<DailyIntakeReport, TrackerError>;

    async fn records_for_day(&self, date: &str) -> Result<Vec<AnalysisRecord>, TrackerError>;

    async fn list_records(&self) -> Result<Vec<AnalysisRecord>, TrackerError>;

    async fn save_analysis(
        &self,
        name: &str,
        analysis_data: AnalysisData,
        timestamp: i64,
    ) -> Result<AnalysisRecord, TrackerError>;

    async fn analyze_and_save(
        &self,
        analyzer: &dyn IngredientAnalyzer,
        input: &str,
        timestamp: i64,
    ) -> Result<AnalysisRecord, TrackerError>;

    async fn delete_record(&self, id: &RecordId) -> Result<(), TrackerError>;
}

pub(crate) struct TrackingUsecaseImpl<R, Tz>
where
    R: RecordsRepository,
    Tz: TimeZone,
{
    records_repository: R,
    config: TrackerConfig,
    tz: Tz,
}

impl<R, Tz> TrackingUsecaseImpl<R, Tz>
where
    R: RecordsRepository,
    Tz: TimeZone,
{
    pub(crate) fn new(records_repository: R, config: TrackerConfig, tz: Tz) -> Self {
        Self {
            records_repository,
            config,
            tz,
        }
    }

    pub(crate) fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn window(&self, date: &str) -> Result<DayWindow, TrackerError> {
        let date: NaiveDate = ISODateModel::from_str(date)?.into();
        DayWindow::new(date, &self.tz)
    }
}

#[async_trait]
impl<R, Tz> TrackingUsecase for TrackingUsecaseImpl<R, Tz>
where
    R: RecordsRepository,
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    async fn daily_report(&self, date: &str) -> Result<DailyIntakeReport, TrackerError> {
        let window = self.window(date)?;
        let records = self.records_repository.list().await?;

        let aggregator = DailyAggregator::new(&self.config.policy);
        let product_count = aggregator.records_in(&records, &window).len();
        let total = aggregator.aggregate(&records, &window);
        let evaluation =
            ThresholdEvaluator::new(&self.config.limits, &self.config.policy).evaluate(&total);

        debug!(
            "Daily report for {}: {} product(s), {} warning(s).",
            window.date(),
            product_count,
            evaluation.warnings.len()
        );
        Ok(DailyIntakeReport {
            date: window.date(),
            product_count,
            total,
            quantities: evaluation.quantities,
            warnings: evaluation.warnings,
        })
    }

    async fn records_for_day(&self, date: &str) -> Result<Vec<AnalysisRecord>, TrackerError> {
        let window = self.window(date)?;
        let records = self.records_repository.list().await?;
        Ok(DailyAggregator::new(&self.config.policy)
            .records_in(&records, &window)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn list_records(&self) -> Result<Vec<AnalysisRecord>, TrackerError> {
        self.records_repository.list().await
    }

    async fn save_analysis(
        &self,
        name: &str,
        analysis_data: AnalysisData,
        timestamp: i64,
    ) -> Result<AnalysisRecord, TrackerError> {
        let record = AnalysisRecord::new(name, timestamp, analysis_data);
        self.records_repository.add(record.clone()).await?;
        Ok(record)
    }

    async fn analyze_and_save(
        &self,
        analyzer: &dyn IngredientAnalyzer,
        input: &str,
        timestamp: i64,
    ) -> Result<AnalysisRecord, TrackerError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyAnalysisInput);
        }
        let analysis_data = analyzer.analyze(name).await.map_err(|e| {
            warn!("Analysis of '{}' failed: {}", name, e);
            match e {
                e @ TrackerError::AnalysisFailed { .. } => e,
                other => TrackerError::analysis_failed(other),
            }
        })?;
        self.save_analysis(name, analysis_data, timestamp).await
    }

    async fn delete_record(&self, id: &RecordId) -> Result<(), TrackerError> {
        self.records_repository.delete(id).await
    }
}
