use serde::{Deserialize, Serialize};

pub const STATIC_SOURCE: &str = "static";
pub const API_SOURCE: &str = "api";

fn static_source() -> String {
    STATIC_SOURCE.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotifyStats {
    #[serde(default)]
    pub total_streams: u64,
    #[serde(default)]
    pub monthly_listeners: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub popularity_score: u32,
    #[serde(default)]
    pub current_playlists: u64,
    #[serde(default)]
    pub playlist_reach: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossPlatformStats {
    #[serde(default)]
    pub total_streams: u64,
    #[serde(default)]
    pub total_playlists: u64,
    #[serde(default)]
    pub playlist_reach: u64,
}

/// Artist-level streaming figures, either from the static fixture or a live lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistStats {
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub spotify: SpotifyStats,
    #[serde(default)]
    pub cross_platform: CrossPlatformStats,
    #[serde(rename = "_source", default = "static_source")]
    pub source: String,
}

impl ArtistStats {
    /// Cross-platform playlist reach, or Spotify's when no aggregate exists.
    pub fn playlist_reach(&self) -> u64 {
        if self.cross_platform.playlist_reach > 0 {
            self.cross_platform.playlist_reach
        } else {
            self.spotify.playlist_reach
        }
    }

    pub fn playlist_count(&self) -> u64 {
        if self.cross_platform.total_playlists > 0 {
            self.cross_platform.total_playlists
        } else {
            self.spotify.current_playlists
        }
    }
}

/// One catalog track. `streams` are Spotify streams, the only per-track signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub song: String,
    pub artist: String,
    pub streams: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub popularity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub release_date: Option<String>,
}

impl Track {
    pub fn new(song: &str, artist: &str, streams: u64) -> Self {
        Self {
            song: song.to_string(),
            artist: artist.to_string(),
            streams,
            genre: None,
            popularity: None,
            release_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialAccount {
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub posts_count: u64,
}

/// 30-day account overview counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialOverview {
    #[serde(default)]
    pub views_30d: u64,
    #[serde(default)]
    pub accounts_reached: u64,
    #[serde(default)]
    pub interactions: u64,
    #[serde(default)]
    pub accounts_engaged: u64,
    #[serde(default)]
    pub profile_visits: u64,
    #[serde(default)]
    pub external_link_taps: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyEngagement {
    pub year: i32,
    pub posts: u32,
    pub avg_likes: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollaborationStats {
    #[serde(default)]
    pub solo_posts: u64,
    #[serde(default)]
    pub solo_avg_likes: f64,
    #[serde(default)]
    pub collab_posts: u64,
    #[serde(default)]
    pub collab_avg_likes: f64,
    #[serde(default)]
    pub collaborators: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialInsights {
    #[serde(default)]
    pub account: SocialAccount,
    #[serde(default)]
    pub overview: SocialOverview,
    #[serde(default)]
    pub yearly: Vec<YearlyEngagement>,
    #[serde(default)]
    pub collaborations: CollaborationStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_stats_defaults_source_to_static() {
        let stats: ArtistStats = serde_json::from_str(
            r#"{"artist": "Jakke", "spotify": {"total_streams": 10, "monthly_listeners": 5}}"#,
        )
        .unwrap();

        assert_eq!(stats.source, STATIC_SOURCE);
        assert_eq!(stats.spotify.total_streams, 10);
        assert_eq!(stats.cross_platform, CrossPlatformStats::default());
    }

    #[test]
    fn playlist_figures_prefer_cross_platform() {
        let mut stats = ArtistStats {
            artist: "Jakke".to_string(),
            last_updated: None,
            spotify: SpotifyStats {
                current_playlists: 40,
                playlist_reach: 900_000,
                ..Default::default()
            },
            cross_platform: CrossPlatformStats::default(),
            source: static_source(),
        };
        assert_eq!(stats.playlist_count(), 40);
        assert_eq!(stats.playlist_reach(), 900_000);

        stats.cross_platform.total_playlists = 60;
        stats.cross_platform.playlist_reach = 1_500_000;
        assert_eq!(stats.playlist_count(), 60);
        assert_eq!(stats.playlist_reach(), 1_500_000);
    }
}
