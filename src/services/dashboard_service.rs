use crate::config::cli::ReportArgs;
use crate::domain::{ArtistStats, DashboardReport, SocialInsights, Storage, Track};
use crate::error::Result;
use crate::services::{
    metrics::MetricsService,
    revenue::RevenueEstimator,
    scoring::{StrategyInputs, StrategyReport, StrategyScorer},
};
use chrono::{Datelike, Local};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct DashboardService {
    store: Arc<dyn Storage>,
    metrics: MetricsService,
    revenue: RevenueEstimator,
    scorer: StrategyScorer,
    settings: ReportArgs,
    current_year: i32,
}

impl DashboardService {
    pub fn new(
        store: Arc<dyn Storage + 'static>,
        metrics: MetricsService,
        revenue: RevenueEstimator,
        scorer: StrategyScorer,
        settings: ReportArgs,
    ) -> Self {
        Self {
            store,
            metrics,
            revenue,
            scorer,
            settings,
            current_year: Local::now().year(),
        }
    }

    /// Pins the year the social trend treats as current (and therefore partial).
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub async fn run(&self) -> Result<PathBuf> {
        info!("Starting dashboard report pipeline");

        let report = self.build_report().await?;
        let path = self.store.save_report(&report)?;

        info!(
            "Report for {} written to {:?}: ${:.0} estimated revenue across {} project(s), strategy score {} ({})",
            report.artist,
            path,
            report.revenue.combined.estimated_revenue,
            report.revenue.projects.len(),
            report.strategy.composite,
            report.strategy.band.label()
        );
        Ok(path)
    }

    pub async fn build_report(&self) -> Result<DashboardReport> {
        info!("Step 1: Loading metrics...");
        let stats = self.metrics.artist_stats().await?;
        let tracks = self.metrics.tracks()?;
        let social = self.metrics.social_insights()?;
        let side_project = self.metrics.side_project_stats()?;
        info!(
            "Loaded {} tracks for {} ({} data)",
            tracks.len(),
            stats.artist,
            stats.source
        );

        info!("Step 2: Estimating revenue...");
        let total_streams = self.cross_platform_streams(&stats);
        let mut projects = vec![(stats.artist.as_str(), total_streams)];
        if let Some(side) = &side_project {
            let side_streams = side_project_streams(side);
            info!("Including side project {} ({} streams)", side.artist, side_streams);
            projects.push((side.artist.as_str(), side_streams));
        }
        let revenue = self.revenue.combined_revenue(&projects)?;
        let catalog = self.revenue.catalog_revenue(&tracks);
        let projection = self.revenue.project(
            total_streams,
            self.settings.monthly_streams,
            self.settings.months,
            catalog.average_split,
        )?;
        let targets = self
            .revenue
            .monthly_revenue_target(self.settings.annual_target)?;

        info!("Step 3: Scoring strategy...");
        let strategy = self
            .scorer
            .score(&self.strategy_inputs(&stats, &tracks, &social))?;

        Ok(DashboardReport::new(
            stats.artist,
            stats.source,
            revenue,
            catalog,
            projection,
            targets,
            strategy,
        ))
    }

    pub async fn strategy(&self) -> Result<StrategyReport> {
        let stats = self.metrics.artist_stats().await?;
        let tracks = self.metrics.tracks()?;
        let social = self.metrics.social_insights()?;

        self.scorer
            .score(&self.strategy_inputs(&stats, &tracks, &social))
    }

    fn strategy_inputs(
        &self,
        stats: &ArtistStats,
        tracks: &[Track],
        social: &SocialInsights,
    ) -> StrategyInputs {
        StrategyInputs::from_fixtures(
            stats,
            tracks,
            social,
            self.current_year,
            self.scorer.tables().social.min_posts_per_year,
        )
    }

    /// The aggregated cross-platform total, or one inferred from Spotify when
    /// the source has no aggregate.
    fn cross_platform_streams(&self, stats: &ArtistStats) -> u64 {
        if stats.cross_platform.total_streams > 0 {
            stats.cross_platform.total_streams
        } else {
            self.revenue
                .inferred_total_streams(stats.spotify.total_streams)
        }
    }
}

/// A side project's aggregate when it has one, else its Spotify total taken as is.
fn side_project_streams(stats: &ArtistStats) -> u64 {
    if stats.cross_platform.total_streams > 0 {
        stats.cross_platform.total_streams
    } else {
        stats.spotify.total_streams
    }
}
