use crate::domain::{ArtistStats, CrossPlatformStats, SpotifyStats, API_SOURCE};
use crate::error::Result;
use chrono::Local;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

pub const RAPIDAPI_HOST: &str = "songstats.p.rapidapi.com";

#[derive(Debug, Default, Deserialize)]
pub struct SongstatsInfo {
    #[serde(default)]
    pub artist_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SongstatsStatsResponse {
    #[serde(default)]
    pub stats: SongstatsStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct SongstatsStats {
    #[serde(default)]
    pub spotify: SongstatsSpotify,
    #[serde(default)]
    pub cross_platform: SongstatsCrossPlatform,
}

#[derive(Debug, Default, Deserialize)]
pub struct SongstatsSpotify {
    #[serde(default)]
    pub streams_total: u64,
    #[serde(default)]
    pub monthly_listeners_current: u64,
    #[serde(default)]
    pub followers_total: u64,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub playlists_total: u64,
    #[serde(default)]
    pub playlist_reach: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SongstatsCrossPlatform {
    #[serde(default)]
    pub streams_total: u64,
    #[serde(default)]
    pub playlists_total: u64,
    #[serde(default)]
    pub playlist_reach: u64,
}

impl SongstatsStatsResponse {
    pub fn into_artist_stats(self, info: SongstatsInfo) -> ArtistStats {
        let spotify = self.stats.spotify;
        let cross = self.stats.cross_platform;

        ArtistStats {
            artist: info.artist_name,
            last_updated: Some(Local::now().format("%Y-%m-%d").to_string()),
            spotify: SpotifyStats {
                total_streams: spotify.streams_total,
                monthly_listeners: spotify.monthly_listeners_current,
                followers: spotify.followers_total,
                popularity_score: spotify.popularity,
                current_playlists: spotify.playlists_total,
                playlist_reach: spotify.playlist_reach,
            },
            cross_platform: CrossPlatformStats {
                total_streams: cross.streams_total,
                total_playlists: cross.playlists_total,
                playlist_reach: cross.playlist_reach,
            },
            source: API_SOURCE.to_string(),
        }
    }
}

pub struct SongstatsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SongstatsClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: format!("https://{}/artists", RAPIDAPI_HOST),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str, spotify_id: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&[("source", "spotify"), ("spotify_artist_id", spotify_id)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    pub async fn get_artist_stats(&self, spotify_id: &str) -> Result<ArtistStats> {
        let info: SongstatsInfo = self.get("info", spotify_id).await?;
        let stats: SongstatsStatsResponse = self.get("stats", spotify_id).await?;

        info!("Fetched live Songstats data for {}", info.artist_name);
        Ok(stats.into_artist_stats(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_api_response_into_artist_stats() {
        let stats: SongstatsStatsResponse = serde_json::from_str(
            r#"{"stats": {
                "spotify": {"streams_total": 3000000, "monthly_listeners_current": 42000,
                            "followers_total": 9000, "popularity": 31,
                            "playlists_total": 64, "playlist_reach": 1200000},
                "cross_platform": {"streams_total": 3263417}
            }}"#,
        )
        .unwrap();
        let info = SongstatsInfo {
            artist_name: "Jakke".to_string(),
        };

        let artist = stats.into_artist_stats(info);

        assert_eq!(artist.source, API_SOURCE);
        assert_eq!(artist.spotify.monthly_listeners, 42_000);
        assert_eq!(artist.spotify.current_playlists, 64);
        assert_eq!(artist.cross_platform.total_streams, 3_263_417);
        assert_eq!(artist.cross_platform.playlist_reach, 0);
        // Falls back to the Spotify figure when cross-platform reach is absent.
        assert_eq!(artist.playlist_reach(), 1_200_000);
    }

    #[test]
    fn empty_response_maps_to_zeroes() {
        let stats: SongstatsStatsResponse = serde_json::from_str("{}").unwrap();
        let artist = stats.into_artist_stats(SongstatsInfo::default());
        assert_eq!(artist.spotify, SpotifyStats::default());
    }
}
