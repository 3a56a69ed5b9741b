use crate::error::{DashError, Result};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const OTHER_PLATFORM: &str = "Other";
pub const SPOTIFY: &str = "Spotify";
pub const FULL_OWNERSHIP: f64 = 1.0;

const WEIGHT_TOLERANCE: f64 = 1e-6;

pub static DEFAULT_TABLES: Lazy<EngineTables> = Lazy::new(EngineTables::default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRate {
    pub platform: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformShare {
    pub platform: String,
    pub share: f64,
}

impl PlatformRate {
    fn new(platform: &str, rate: f64) -> Self {
        Self {
            platform: platform.to_string(),
            rate,
        }
    }
}

impl PlatformShare {
    pub fn new(platform: &str, share: f64) -> Self {
        Self {
            platform: platform.to_string(),
            share,
        }
    }
}

/// Exact song title to the primary artist's fraction of its revenue.
///
/// Titles are matched byte for byte. A retitled track is no longer found and
/// falls back to full ownership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnershipSplits {
    entries: FxHashMap<String, f64>,
}

impl OwnershipSplits {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(t, s)| (t.into(), s)).collect(),
        }
    }

    pub fn lookup(&self, title: &str) -> Option<f64> {
        self.entries.get(title).copied()
    }

    pub fn get_or_full(&self, title: &str) -> f64 {
        self.lookup(title).unwrap_or(FULL_OWNERSHIP)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueTables {
    pub rates: Vec<PlatformRate>,
    pub shares: Vec<PlatformShare>,
    /// Fraction of all streams assumed to come from Spotify, the only
    /// platform with per-track counts.
    pub observed_share: f64,
    pub ownership: OwnershipSplits,
}

impl Default for RevenueTables {
    fn default() -> Self {
        Self {
            rates: vec![
                PlatformRate::new(SPOTIFY, 0.004),
                PlatformRate::new("Apple Music", 0.01),
                PlatformRate::new("YouTube Music", 0.008),
                PlatformRate::new("YouTube (video)", 0.003),
                PlatformRate::new("Amazon Music", 0.004),
                PlatformRate::new("Deezer", 0.004),
                PlatformRate::new("Tidal", 0.013),
                PlatformRate::new("Pandora", 0.007),
                PlatformRate::new("SoundCloud", 0.003),
                PlatformRate::new(OTHER_PLATFORM, 0.004),
            ],
            shares: vec![
                PlatformShare::new(SPOTIFY, 0.60),
                PlatformShare::new("Apple Music", 0.15),
                PlatformShare::new("YouTube Music", 0.08),
                PlatformShare::new("Amazon Music", 0.05),
                PlatformShare::new("Deezer", 0.04),
                PlatformShare::new("Tidal", 0.02),
                PlatformShare::new(OTHER_PLATFORM, 0.06),
            ],
            observed_share: 0.60,
            ownership: default_ownership(),
        }
    }
}

fn default_ownership() -> OwnershipSplits {
    OwnershipSplits::from_entries([
        // 50/50 co-writes
        ("Your Love's Not Wasted", 0.50),
        ("Sugar Tide", 0.50),
        ("Brick by Brick", 0.50),
        ("Delicate", 0.50),
        ("Drink You Slowly", 0.50),
        ("Late Night", 0.50),
        ("Hurricane", 0.50),
        ("Adriatic", 0.50),
        ("Whisper Of The Void", 0.50),
        // featured collaborators, primary writer keeps the song
        ("Peace Of Mind", 1.0),
        ("Karma Response", 1.0),
        ("Waves", 1.0),
        ("Without Peace", 1.0),
        ("WAIT", 1.0),
        ("Shallow Mold", 1.0),
        ("HOW DO YOU LOVE", 1.0),
        // solo releases
        ("Waves (Acoustic)", 1.0),
        ("Burn", 1.0),
        ("Burn Me Up", 1.0),
        ("Release", 1.0),
        ("Father World (Mama Earth)", 1.0),
        ("Take Me With You", 1.0),
        // remixes keep the master share
        ("Sugar Tide (Club Mix)", 1.0),
        ("Sugar Tide (Lofi Remix)", 1.0),
        ("Sugar Tide (Remix)", 1.0),
        ("Release (TRØVES Remix)", 1.0),
        ("Release (Curt Reynolds Remix)", 1.0),
        ("Burn Me Up (Jako Diaz Remix)", 1.0),
    ])
}

impl RevenueTables {
    pub fn rate(&self, platform: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|r| r.platform == platform)
            .map(|r| r.rate)
    }

    /// Rate for `platform`, or the "Other" rate when the platform is unlisted.
    pub fn rate_or_other(&self, platform: &str) -> f64 {
        self.rate(platform)
            .or_else(|| self.rate(OTHER_PLATFORM))
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rate(OTHER_PLATFORM).is_none() {
            return Err(DashError::InvalidTables(format!(
                "rate table has no \"{OTHER_PLATFORM}\" entry"
            )));
        }
        if let Some(bad) = self.rates.iter().find(|r| !(r.rate > 0.0) || !r.rate.is_finite()) {
            return Err(DashError::InvalidTables(format!(
                "rate for {} must be positive, got {}",
                bad.platform, bad.rate
            )));
        }
        if let Some(bad) = self
            .shares
            .iter()
            .find(|s| !(0.0..=1.0).contains(&s.share))
        {
            return Err(DashError::InvalidTables(format!(
                "share for {} must be within [0, 1], got {}",
                bad.platform, bad.share
            )));
        }
        let share_sum: f64 = self.shares.iter().map(|s| s.share).sum();
        if (share_sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(DashError::InvalidTables(format!(
                "platform shares sum to {share_sum}, expected 1.0"
            )));
        }
        if !(self.observed_share > 0.0 && self.observed_share <= 1.0) {
            return Err(DashError::InvalidTables(format!(
                "observed share must be within (0, 1], got {}",
                self.observed_share
            )));
        }
        if let Some((title, share)) = self
            .ownership
            .iter()
            .find(|(_, s)| !(0.0..=1.0).contains(*s))
        {
            return Err(DashError::InvalidTables(format!(
                "ownership split for \"{title}\" must be within [0, 1], got {share}"
            )));
        }
        Ok(())
    }
}

/// A raw metric's reference value and its weight inside a category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub benchmark: f64,
    pub weight: f64,
}

impl MetricSpec {
    pub const fn new(benchmark: f64, weight: f64) -> Self {
        Self { benchmark, weight }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingBenchmarks {
    pub monthly_listeners: MetricSpec,
    pub playlist_reach: MetricSpec,
    pub playlist_count: MetricSpec,
    pub avg_popularity: MetricSpec,
}

impl Default for StreamingBenchmarks {
    fn default() -> Self {
        Self {
            monthly_listeners: MetricSpec::new(50_000.0, 0.30),
            playlist_reach: MetricSpec::new(2_000_000.0, 0.25),
            playlist_count: MetricSpec::new(75.0, 0.25),
            avg_popularity: MetricSpec::new(33.0, 0.20),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialBenchmarks {
    pub engagement_rate: MetricSpec,
    /// Short-form video performance is not measured; it contributes a flat score.
    pub short_form_video_score: f64,
    pub short_form_video_weight: f64,
    pub reach: MetricSpec,
    pub trend_weight: f64,
    /// A year only counts toward the trend with at least this many posts.
    pub min_posts_per_year: u32,
}

impl Default for SocialBenchmarks {
    fn default() -> Self {
        Self {
            engagement_rate: MetricSpec::new(0.05, 0.35),
            short_form_video_score: 80.0,
            short_form_video_weight: 0.25,
            reach: MetricSpec::new(0.35, 0.20),
            trend_weight: 0.20,
            min_posts_per_year: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaborationBenchmarks {
    /// Collab post average likes over solo post average likes.
    pub multiplier: MetricSpec,
    /// Collab posts over all posts.
    pub ratio: MetricSpec,
    pub collaborators: MetricSpec,
}

impl Default for CollaborationBenchmarks {
    fn default() -> Self {
        Self {
            multiplier: MetricSpec::new(2.0, 0.40),
            ratio: MetricSpec::new(0.25, 0.35),
            collaborators: MetricSpec::new(15.0, 0.25),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelBenchmarks {
    pub link_tap_rate: MetricSpec,
    pub profile_visit_rate: MetricSpec,
}

impl Default for FunnelBenchmarks {
    fn default() -> Self {
        Self {
            link_tap_rate: MetricSpec::new(0.03, 0.70),
            profile_visit_rate: MetricSpec::new(0.08, 0.30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogBenchmarks {
    pub song_count: MetricSpec,
    pub genre_count: MetricSpec,
    pub avg_streams: MetricSpec,
}

impl Default for CatalogBenchmarks {
    fn default() -> Self {
        Self {
            song_count: MetricSpec::new(75.0, 0.40),
            genre_count: MetricSpec::new(10.0, 0.30),
            avg_streams: MetricSpec::new(200_000.0, 0.30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub streaming: f64,
    pub social: f64,
    pub collaborations: f64,
    pub funnel: f64,
    pub catalog: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            streaming: 0.30,
            social: 0.25,
            collaborations: 0.20,
            funnel: 0.15,
            catalog: 0.10,
        }
    }
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.streaming + self.social + self.collaborations + self.funnel + self.catalog
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    pub streaming: StreamingBenchmarks,
    pub social: SocialBenchmarks,
    pub collaborations: CollaborationBenchmarks,
    pub funnel: FunnelBenchmarks,
    pub catalog: CatalogBenchmarks,
    pub weights: CategoryWeights,
}

impl ScoringTables {
    pub fn validate(&self) -> Result<()> {
        let s = &self.streaming;
        let so = &self.social;
        let c = &self.collaborations;
        let f = &self.funnel;
        let ca = &self.catalog;

        let groups = [
            (
                "streaming",
                s.monthly_listeners.weight
                    + s.playlist_reach.weight
                    + s.playlist_count.weight
                    + s.avg_popularity.weight,
            ),
            (
                "social",
                so.engagement_rate.weight
                    + so.short_form_video_weight
                    + so.reach.weight
                    + so.trend_weight,
            ),
            (
                "collaborations",
                c.multiplier.weight + c.ratio.weight + c.collaborators.weight,
            ),
            (
                "funnel",
                f.link_tap_rate.weight + f.profile_visit_rate.weight,
            ),
            (
                "catalog",
                ca.song_count.weight + ca.genre_count.weight + ca.avg_streams.weight,
            ),
            ("category", self.weights.sum()),
        ];

        for (name, sum) in groups {
            if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
                return Err(DashError::InvalidTables(format!(
                    "{name} weights sum to {sum}, expected 1.0"
                )));
            }
        }

        if !(0.0..=100.0).contains(&so.short_form_video_score) {
            return Err(DashError::InvalidTables(format!(
                "short-form video score must be within [0, 100], got {}",
                so.short_form_video_score
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTables {
    pub revenue: RevenueTables,
    pub scoring: ScoringTables,
}

impl EngineTables {
    /// Loads tables from `path`, or the built-in defaults when no file is given.
    /// Sections missing from the file keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let tables = match path {
            Some(path) => {
                info!("Loading engine tables from {:?}", path);
                serde_json::from_str(&std::fs::read_to_string(path)?)?
            }
            None => DEFAULT_TABLES.clone(),
        };

        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<()> {
        self.revenue.validate()?;
        self.scoring.validate()
    }
}
