use crate::services::revenue::{CatalogRevenue, CombinedRevenue, ProjectionMonth, StreamTarget};
use crate::services::scoring::StrategyReport;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub artist: String,
    pub generated_at: String,
    /// The primary artist is always the first project.
    pub revenue: CombinedRevenue,
    pub catalog: CatalogRevenue,
    pub projection: Vec<ProjectionMonth>,
    pub targets: Vec<StreamTarget>,
    pub strategy: StrategyReport,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// "api" when artist stats came from a live lookup, "static" otherwise.
    pub data_source: String,
    pub total_tracks: usize,
    pub version: String,
}

impl DashboardReport {
    pub fn new(
        artist: String,
        data_source: String,
        revenue: CombinedRevenue,
        catalog: CatalogRevenue,
        projection: Vec<ProjectionMonth>,
        targets: Vec<StreamTarget>,
        strategy: StrategyReport,
    ) -> Self {
        let total_tracks = catalog.tracks.len();

        Self {
            artist,
            generated_at: Local::now().to_rfc3339(),
            revenue,
            catalog,
            projection,
            targets,
            strategy,
            metadata: ReportMetadata {
                data_source,
                total_tracks,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
