mod metrics;
mod report;
pub(crate) mod storage;

pub use metrics::{
    ArtistStats, CollaborationStats, CrossPlatformStats, SocialAccount, SocialInsights,
    SocialOverview, SpotifyStats, Track, YearlyEngagement, API_SOURCE, STATIC_SOURCE,
};
pub use report::{DashboardReport, ReportMetadata};
pub use storage::{Storage, StorageKeys};
