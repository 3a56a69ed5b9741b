use crate::domain::{ArtistStats, SocialInsights, Storage, Track};
use crate::error::Result;
use crate::infrastructure::SongstatsClient;
use std::sync::Arc;
use tracing::{info, warn};

struct LiveSource {
    client: SongstatsClient,
    spotify_id: String,
}

/// Loads dashboard inputs. Artist stats come from Songstats when a live source
/// is configured, and from the static fixture otherwise or on any failure.
pub struct MetricsService {
    store: Arc<dyn Storage>,
    live: Option<LiveSource>,
}

impl MetricsService {
    pub fn new(store: Arc<dyn Storage + 'static>) -> Self {
        Self { store, live: None }
    }

    pub fn with_live(mut self, client: SongstatsClient, spotify_id: String) -> Self {
        info!("Live Songstats lookups enabled for {}", spotify_id);
        self.live = Some(LiveSource { client, spotify_id });
        self
    }

    pub async fn artist_stats(&self) -> Result<ArtistStats> {
        if let Some(live) = &self.live {
            match live.client.get_artist_stats(&live.spotify_id).await {
                Ok(stats) => return Ok(stats),
                Err(e) => warn!("Songstats API failed, using static fallback: {}", e),
            }
        }

        self.store.load_artist_stats()
    }

    pub fn tracks(&self) -> Result<Vec<Track>> {
        self.store.load_tracks()
    }

    pub fn social_insights(&self) -> Result<SocialInsights> {
        self.store.load_social_insights()
    }

    /// Always static; the live source only covers the primary artist.
    pub fn side_project_stats(&self) -> Result<Option<ArtistStats>> {
        self.store.load_side_project_stats()
    }
}
