use super::{ArtistStats, DashboardReport, SocialInsights, Track};
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn load_artist_stats(&self) -> Result<ArtistStats>;
    fn load_tracks(&self) -> Result<Vec<Track>>;
    fn load_social_insights(&self) -> Result<SocialInsights>;
    /// Stats for a second artist project, `None` when there is none.
    fn load_side_project_stats(&self) -> Result<Option<ArtistStats>>;
    /// Writes the report and returns where it landed.
    fn save_report(&self, report: &DashboardReport) -> Result<PathBuf>;
}

pub struct StorageKeys;

impl StorageKeys {
    // Fixtures, read from the data dir
    pub const ARTIST_STATS: &'static str = "songstats_artist";
    pub const TRACKS: &'static str = "songs_all";
    pub const SOCIAL_INSIGHTS: &'static str = "instagram_insights";
    pub const SIDE_PROJECT_STATS: &'static str = "songstats_side_project";

    // Written to the output dir
    pub const REPORT: &'static str = "dashboard_report";
}
