use std::path::PathBuf;

use chrono::{Local, TimeZone, Utc};

use crate::{
    data::datasources::config_ron_datasource::{ConfigRonDatasource as _, ConfigRonDatasourceImpl},
    domain::usecases::tracking_usecase::{TrackingUsecase as _, TrackingUsecaseImpl},
    entities::{
        AnalysisData, AnalysisRecord, DailyIntakeReport, IngredientAnalyzer, RecordId,
        TrackerConfig,
    },
    errors::TrackerError,
    presentation::report_printer::ReportPrinter,
    repositories::{JsonFileRecordsRepository, RecordsRepository},
};

/// Reads a `TrackerConfig` from a RON file. Omitted fields keep their defaults.
pub fn load_config<P>(path: P) -> Result<TrackerConfig, TrackerError>
where
    P: AsRef<std::path::Path>,
{
    ConfigRonDatasourceImpl::new().from_file(path)
}

pub fn parse_config(ron: &str) -> Result<TrackerConfig, TrackerError> {
    ConfigRonDatasourceImpl::new().from_string(ron)
}

/// Entry point: a record store plus the daily intake engine. Day boundaries
/// are computed in `Tz` (the local time zone unless specified otherwise).
pub struct IntakeTracker<R, Tz = Local>
where
    R: RecordsRepository,
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    tracking_usecase: TrackingUsecaseImpl<R, Tz>,
    printer: ReportPrinter,
}

impl IntakeTracker<JsonFileRecordsRepository, Local> {
    /// Tracker over a JSON file of saved records, using local time.
    pub fn from_json_file(path: impl Into<PathBuf>, config: TrackerConfig) -> Self {
        Self::new(JsonFileRecordsRepository::new(path), config)
    }
}

impl<R: RecordsRepository> IntakeTracker<R, Local> {
    pub fn new(records_repository: R, config: TrackerConfig) -> Self {
        Self::with_time_zone(records_repository, config, Local)
    }
}

impl<R, Tz> IntakeTracker<R, Tz>
where
    R: RecordsRepository,
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    pub fn with_time_zone(records_repository: R, config: TrackerConfig, tz: Tz) -> Self {
        Self {
            tracking_usecase: TrackingUsecaseImpl::new(records_repository, config, tz),
            printer: ReportPrinter::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        self.tracking_usecase.config()
    }

    /// Totals, limit percentages and warnings for a `YYYY-MM-DD` day.
    pub async fn daily_report(&self, date: &str) -> Result<DailyIntakeReport, TrackerError> {
        self.tracking_usecase.daily_report(date).await
    }

    pub async fn render_daily_report(&self, date: &str) -> Result<String, TrackerError> {
        let report = self.tracking_usecase.daily_report(date).await?;
        Ok(self.printer.print_report(&report))
    }

    /// Records logged on the given day, in store order.
    pub async fn products_for_day(&self, date: &str) -> Result<Vec<AnalysisRecord>, TrackerError> {
        self.tracking_usecase.records_for_day(date).await
    }

    pub async fn records(&self) -> Result<Vec<AnalysisRecord>, TrackerError> {
        self.tracking_usecase.list_records().await
    }

    /// Saves an analysis as a new record logged now.
    pub async fn save_analysis(
        &self,
        name: &str,
        analysis_data: AnalysisData,
    ) -> Result<AnalysisRecord, TrackerError> {
        self.save_analysis_at(name, analysis_data, Utc::now().timestamp_millis())
            .await
    }

    pub async fn save_analysis_at(
        &self,
        name: &str,
        analysis_data: AnalysisData,
        timestamp: i64,
    ) -> Result<AnalysisRecord, TrackerError> {
        self.tracking_usecase
            .save_analysis(name, analysis_data, timestamp)
            .await
    }

    /// Runs the external analysis and saves the result. Nothing is stored if
    /// the input is blank or the analysis fails.
    pub async fn analyze_and_save(
        &self,
        analyzer: &dyn IngredientAnalyzer,
        input: &str,
    ) -> Result<AnalysisRecord, TrackerError> {
        self.tracking_usecase
            .analyze_and_save(analyzer, input, Utc::now().timestamp_millis())
            .await
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), TrackerError> {
        self.tracking_usecase.delete_record(id).await
    }
}
