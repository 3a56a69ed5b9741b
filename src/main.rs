use artistpulse::config::cli::{Args, Commands, ReportArgs};
use artistpulse::config::Config;
use artistpulse::error::Result;
use artistpulse::infrastructure::{FileSystemStore, SongstatsClient};
use artistpulse::services::{
    dashboard_service::DashboardService, metrics::MetricsService, revenue::RevenueEstimator,
    scoring::StrategyScorer,
};
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let level = args.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::from_args(args)?;
    let revenue = RevenueEstimator::new(config.tables.revenue.clone());

    match config.args.command.clone() {
        Some(Commands::Revenue { streams }) => print_json(&revenue.estimate_revenue(streams, None)),
        Some(Commands::Targets { annual }) => print_json(&revenue.monthly_revenue_target(annual)?),
        Some(Commands::Split { title }) => print_json(&serde_json::json!({
            "title": title,
            "ownership_split": revenue.get_ownership_split(&title),
        })),
        Some(Commands::Score) => {
            let service = dashboard_service(&config, revenue, ReportArgs::default());
            print_json(&service.strategy().await?)
        }
        Some(Commands::Report(settings)) => run_report(&config, revenue, settings).await,
        None => run_report(&config, revenue, ReportArgs::default()).await,
    }
}

async fn run_report(config: &Config, revenue: RevenueEstimator, settings: ReportArgs) -> Result<()> {
    config.ensure_directories()?;

    let service = dashboard_service(config, revenue, settings);
    service.run().await?;

    info!("Dashboard report completed successfully!");
    Ok(())
}

fn dashboard_service(
    config: &Config,
    revenue: RevenueEstimator,
    settings: ReportArgs,
) -> DashboardService {
    let store = Arc::new(FileSystemStore::new(
        &config.args.data_dir,
        &config.args.output_dir,
    ));

    let mut metrics = MetricsService::new(store.clone());
    if !config.args.skip_live {
        if let (Some(key), Some(artist_id)) = (
            &config.args.songstats_api_key,
            &config.args.spotify_artist_id,
        ) {
            let client = SongstatsClient::new(config.http_client.clone(), key.clone());
            metrics = metrics.with_live(client, artist_id.clone());
        }
    }

    DashboardService::new(
        store,
        metrics,
        revenue,
        StrategyScorer::new(config.tables.scoring.clone()),
        settings,
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
