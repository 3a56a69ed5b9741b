use crate::config::tables::{MetricSpec, ScoringTables};
use crate::domain::{ArtistStats, SocialInsights, Track, YearlyEngagement};
use crate::error::{ensure_metric, DashError, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MAX_SCORE: u8 = 100;
const NEUTRAL_TREND_SCORE: f64 = 50.0;

// Absorbs binary rounding so a blend of exact 100s truncates to 100, not 99.
const SCORE_EPSILON: f64 = 1e-9;

/// Scales `value` against `benchmark` onto 0..=100. A zero benchmark scores 0,
/// as does a value that is negative or not finite.
pub fn normalize(value: f64, benchmark: f64) -> f64 {
    if benchmark > 0.0 && value.is_finite() && value >= 0.0 {
        (value / benchmark * 100.0).min(100.0)
    } else {
        0.0
    }
}

fn truncate_score(raw: f64) -> u8 {
    (raw + SCORE_EPSILON).floor().clamp(0.0, MAX_SCORE as f64) as u8
}

fn blend(parts: &[(f64, MetricSpec)]) -> f64 {
    parts
        .iter()
        .map(|(value, spec)| spec.weight * normalize(*value, spec.benchmark))
        .sum()
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Relative change in average likes between the two most recent full years
/// that each had at least `min_posts` posts. `None` when fewer than two qualify.
pub fn yoy_trend(yearly: &[YearlyEngagement], current_year: i32, min_posts: u32) -> Option<f64> {
    let mut qualifying: Vec<&YearlyEngagement> = yearly
        .iter()
        .filter(|y| y.year < current_year && y.posts >= min_posts)
        .collect();
    qualifying.sort_by(|a, b| b.year.cmp(&a.year));

    match qualifying.as_slice() {
        [latest, previous, ..] if previous.avg_likes > 0.0 => {
            Some((latest.avg_likes - previous.avg_likes) / previous.avg_likes)
        }
        _ => None,
    }
}

/// Maps a fractional trend onto 0..=100 around a neutral 50.
pub fn trend_score(trend_pct: Option<f64>) -> f64 {
    match trend_pct {
        Some(trend) if trend.is_finite() => (NEUTRAL_TREND_SCORE + trend * 100.0).clamp(0.0, 100.0),
        _ => NEUTRAL_TREND_SCORE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    Streaming,
    Social,
    Collaborations,
    Funnel,
    Catalog,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::Streaming,
        ScoreCategory::Social,
        ScoreCategory::Collaborations,
        ScoreCategory::Funnel,
        ScoreCategory::Catalog,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Developing,
    NeedsWork,
    Critical,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => ScoreBand::Strong,
            55..=74 => ScoreBand::Developing,
            35..=54 => ScoreBand::NeedsWork,
            _ => ScoreBand::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong",
            ScoreBand::Developing => "Developing",
            ScoreBand::NeedsWork => "Needs Work",
            ScoreBand::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "green",
            ScoreBand::Developing => "amber",
            ScoreBand::NeedsWork => "orange",
            ScoreBand::Critical => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub streaming: u8,
    pub social: u8,
    pub collaborations: u8,
    pub funnel: u8,
    pub catalog: u8,
}

impl CategoryScores {
    pub fn get(&self, category: ScoreCategory) -> u8 {
        match category {
            ScoreCategory::Streaming => self.streaming,
            ScoreCategory::Social => self.social,
            ScoreCategory::Collaborations => self.collaborations,
            ScoreCategory::Funnel => self.funnel,
            ScoreCategory::Catalog => self.catalog,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamingInputs {
    pub monthly_listeners: f64,
    pub playlist_reach: f64,
    pub playlist_count: f64,
    pub avg_popularity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialInputs {
    pub engagement_rate: f64,
    pub reach_pct: f64,
    pub yoy_trend_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollaborationInputs {
    pub collab_multiplier: f64,
    pub collab_ratio: f64,
    pub collaborator_count: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunnelInputs {
    pub link_tap_rate: f64,
    pub profile_visit_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogInputs {
    pub song_count: f64,
    pub genre_count: f64,
    pub avg_streams: f64,
}

/// Raw metrics behind every category, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyInputs {
    pub streaming: StreamingInputs,
    pub social: SocialInputs,
    pub collaborations: CollaborationInputs,
    pub funnel: FunnelInputs,
    pub catalog: CatalogInputs,
}

impl StrategyInputs {
    pub fn from_fixtures(
        stats: &ArtistStats,
        tracks: &[Track],
        social: &SocialInsights,
        current_year: i32,
        min_posts_per_year: u32,
    ) -> Self {
        let popularities: Vec<f64> = tracks
            .iter()
            .filter_map(|t| t.popularity)
            .map(f64::from)
            .collect();
        let avg_popularity = if popularities.is_empty() {
            f64::from(stats.spotify.popularity_score)
        } else {
            popularities.iter().sum::<f64>() / popularities.len() as f64
        };

        let genres: FxHashSet<String> = tracks
            .iter()
            .filter_map(|t| t.genre.as_deref())
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty())
            .collect();
        let total_streams: u64 = tracks.iter().map(|t| t.streams).sum();

        let followers = social.account.followers as f64;
        let overview = &social.overview;
        let collabs = &social.collaborations;

        Self {
            streaming: StreamingInputs {
                monthly_listeners: stats.spotify.monthly_listeners as f64,
                playlist_reach: stats.playlist_reach() as f64,
                playlist_count: stats.playlist_count() as f64,
                avg_popularity,
            },
            social: SocialInputs {
                engagement_rate: ratio(overview.interactions as f64, followers),
                reach_pct: ratio(overview.accounts_reached as f64, followers),
                yoy_trend_pct: yoy_trend(&social.yearly, current_year, min_posts_per_year),
            },
            collaborations: CollaborationInputs {
                collab_multiplier: ratio(collabs.collab_avg_likes, collabs.solo_avg_likes),
                collab_ratio: ratio(
                    collabs.collab_posts as f64,
                    (collabs.collab_posts + collabs.solo_posts) as f64,
                ),
                collaborator_count: collabs.collaborators as f64,
            },
            funnel: FunnelInputs {
                link_tap_rate: ratio(
                    overview.external_link_taps as f64,
                    overview.profile_visits as f64,
                ),
                profile_visit_rate: ratio(
                    overview.profile_visits as f64,
                    overview.accounts_reached as f64,
                ),
            },
            catalog: CatalogInputs {
                song_count: tracks.len() as f64,
                genre_count: genres.len() as f64,
                avg_streams: ratio(total_streams as f64, tracks.len() as f64),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.streaming;
        ensure_metric("monthly listeners", s.monthly_listeners)?;
        ensure_metric("playlist reach", s.playlist_reach)?;
        ensure_metric("playlist count", s.playlist_count)?;
        ensure_metric("average popularity", s.avg_popularity)?;

        ensure_metric("engagement rate", self.social.engagement_rate)?;
        ensure_metric("reach", self.social.reach_pct)?;
        if let Some(trend) = self.social.yoy_trend_pct {
            if !trend.is_finite() {
                return Err(DashError::InvalidInput(
                    "year-over-year trend is not finite".to_string(),
                ));
            }
        }

        let c = &self.collaborations;
        ensure_metric("collab multiplier", c.collab_multiplier)?;
        ensure_metric("collab ratio", c.collab_ratio)?;
        ensure_metric("collaborator count", c.collaborator_count)?;

        ensure_metric("link tap rate", self.funnel.link_tap_rate)?;
        ensure_metric("profile visit rate", self.funnel.profile_visit_rate)?;

        let ca = &self.catalog;
        ensure_metric("song count", ca.song_count)?;
        ensure_metric("genre count", ca.genre_count)?;
        ensure_metric("average streams", ca.avg_streams)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub weight: f64,
    pub score: u8,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    pub inputs: StrategyInputs,
    pub categories: Vec<CategoryScore>,
    pub composite: u8,
    pub band: ScoreBand,
}

pub struct StrategyScorer {
    tables: ScoringTables,
}

impl StrategyScorer {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    pub fn weight(&self, category: ScoreCategory) -> f64 {
        let w = &self.tables.weights;
        match category {
            ScoreCategory::Streaming => w.streaming,
            ScoreCategory::Social => w.social,
            ScoreCategory::Collaborations => w.collaborations,
            ScoreCategory::Funnel => w.funnel,
            ScoreCategory::Catalog => w.catalog,
        }
    }

    pub fn score_streaming(
        &self,
        monthly_listeners: f64,
        playlist_reach: f64,
        playlist_count: f64,
        avg_popularity: f64,
    ) -> u8 {
        let b = &self.tables.streaming;
        truncate_score(blend(&[
            (monthly_listeners, b.monthly_listeners),
            (playlist_reach, b.playlist_reach),
            (playlist_count, b.playlist_count),
            (avg_popularity, b.avg_popularity),
        ]))
    }

    /// `yoy_trend_pct` is `None` without two comparable full years; it then
    /// scores a neutral 50.
    pub fn score_social(
        &self,
        engagement_rate: f64,
        reach_pct: f64,
        yoy_trend_pct: Option<f64>,
    ) -> u8 {
        let b = &self.tables.social;
        let raw = blend(&[
            (engagement_rate, b.engagement_rate),
            (reach_pct, b.reach),
        ]) + b.short_form_video_weight * b.short_form_video_score
            + b.trend_weight * trend_score(yoy_trend_pct);
        truncate_score(raw)
    }

    pub fn score_collaborations(
        &self,
        collab_multiplier: f64,
        collab_ratio: f64,
        collaborator_count: f64,
    ) -> u8 {
        let b = &self.tables.collaborations;
        truncate_score(blend(&[
            (collab_multiplier, b.multiplier),
            (collab_ratio, b.ratio),
            (collaborator_count, b.collaborators),
        ]))
    }

    pub fn score_funnel(&self, link_tap_rate: f64, profile_visit_rate: f64) -> u8 {
        let b = &self.tables.funnel;
        truncate_score(blend(&[
            (link_tap_rate, b.link_tap_rate),
            (profile_visit_rate, b.profile_visit_rate),
        ]))
    }

    pub fn score_catalog(&self, song_count: f64, genre_count: f64, avg_streams: f64) -> u8 {
        let b = &self.tables.catalog;
        truncate_score(blend(&[
            (song_count, b.song_count),
            (genre_count, b.genre_count),
            (avg_streams, b.avg_streams),
        ]))
    }

    pub fn composite_score(&self, scores: &CategoryScores) -> u8 {
        let raw: f64 = ScoreCategory::ALL
            .iter()
            .map(|&c| self.weight(c) * f64::from(scores.get(c)))
            .sum();
        truncate_score(raw)
    }

    pub fn category_scores(&self, inputs: &StrategyInputs) -> CategoryScores {
        let s = &inputs.streaming;
        let so = &inputs.social;
        let c = &inputs.collaborations;
        let f = &inputs.funnel;
        let ca = &inputs.catalog;

        CategoryScores {
            streaming: self.score_streaming(
                s.monthly_listeners,
                s.playlist_reach,
                s.playlist_count,
                s.avg_popularity,
            ),
            social: self.score_social(so.engagement_rate, so.reach_pct, so.yoy_trend_pct),
            collaborations: self.score_collaborations(
                c.collab_multiplier,
                c.collab_ratio,
                c.collaborator_count,
            ),
            funnel: self.score_funnel(f.link_tap_rate, f.profile_visit_rate),
            catalog: self.score_catalog(ca.song_count, ca.genre_count, ca.avg_streams),
        }
    }

    pub fn score(&self, inputs: &StrategyInputs) -> Result<StrategyReport> {
        inputs.validate()?;

        let scores = self.category_scores(inputs);
        let composite = self.composite_score(&scores);

        let categories = ScoreCategory::ALL
            .iter()
            .map(|&category| {
                let score = scores.get(category);
                CategoryScore {
                    category,
                    weight: self.weight(category),
                    score,
                    band: ScoreBand::from_score(score),
                }
            })
            .collect();

        debug!("Category scores: {:?}, composite {}", scores, composite);

        Ok(StrategyReport {
            inputs: inputs.clone(),
            categories,
            composite,
            band: ScoreBand::from_score(composite),
        })
    }
}

impl Default for StrategyScorer {
    fn default() -> Self {
        Self::new(ScoringTables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CollaborationStats, SocialAccount, SocialOverview};
    use crate::error::DashError;

    fn year(year: i32, posts: u32, avg_likes: f64) -> YearlyEngagement {
        YearlyEngagement {
            year,
            posts,
            avg_likes,
        }
    }

    #[test]
    fn normalize_caps_and_guards_zero_benchmark() {
        assert_eq!(normalize(25_000.0, 50_000.0), 50.0);
        assert_eq!(normalize(1_000_000.0, 50_000.0), 100.0);
        assert_eq!(normalize(10.0, 0.0), 0.0);
        assert_eq!(normalize(0.0, 33.0), 0.0);
    }

    #[test]
    fn normalize_scores_malformed_values_as_zero() {
        assert_eq!(normalize(f64::NAN, 50.0), 0.0);
        assert_eq!(normalize(f64::INFINITY, 50.0), 0.0);
        assert_eq!(normalize(-5.0, 50.0), 0.0);
        assert_eq!(normalize(5.0, f64::NAN), 0.0);
    }

    #[test]
    fn category_scores_never_reward_nan() {
        let scorer = StrategyScorer::default();
        assert_eq!(scorer.score_funnel(f64::NAN, f64::NAN), 0);
        assert_eq!(scorer.score_streaming(f64::NAN, 0.0, 0.0, 0.0), 0);
        assert_eq!(scorer.score_catalog(f64::NAN, f64::INFINITY, -1.0), 0);
        assert_eq!(scorer.score_collaborations(f64::NAN, 0.0, 0.0), 0);
        // Only the flat short-form term and the neutral trend remain.
        assert_eq!(scorer.score_social(f64::NAN, f64::NAN, Some(f64::NAN)), 30);
    }

    #[test]
    fn streaming_score_blends_four_metrics() {
        let scorer = StrategyScorer::default();
        // 50 * 0.30 + 50 * 0.25 + 100 * 0.25 + 0 * 0.20
        assert_eq!(scorer.score_streaming(25_000.0, 1_000_000.0, 150.0, 0.0), 52);
        assert_eq!(scorer.score_streaming(0.0, 0.0, 0.0, 0.0), 0);
        assert_eq!(
            scorer.score_streaming(50_000.0, 2_000_000.0, 75.0, 33.0),
            100
        );
    }

    #[test]
    fn social_score_without_trend_history_is_neutral() {
        let scorer = StrategyScorer::default();
        // Flat short-form term (20) plus the neutral trend (0.20 * 50).
        assert_eq!(scorer.score_social(0.0, 0.0, None), 30);
        assert_eq!(scorer.score_social(0.05, 0.35, None), 30 + 35 + 20);
    }

    #[test]
    fn social_trend_is_clamped() {
        let scorer = StrategyScorer::default();
        assert_eq!(scorer.score_social(0.0, 0.0, Some(-0.9)), 20);
        assert_eq!(scorer.score_social(0.0, 0.0, Some(2.0)), 40);
        assert_eq!(scorer.score_social(0.0, 0.0, Some(0.25)), 35);
    }

    #[test]
    fn yoy_trend_needs_two_full_years() {
        let history = vec![year(2023, 137, 150.0), year(2024, 89, 216.0), year(2025, 106, 98.0)];

        let trend = yoy_trend(&history, 2026, 20).unwrap();
        assert!((trend - (98.0 - 216.0) / 216.0).abs() < 1e-12);

        // The current, partial year never counts.
        let trend = yoy_trend(&history, 2025, 20).unwrap();
        assert!((trend - (216.0 - 150.0) / 150.0).abs() < 1e-12);

        // Thin years are skipped.
        let thin = vec![year(2021, 10, 30.0), year(2024, 89, 216.0), year(2025, 106, 98.0)];
        assert!(yoy_trend(&thin, 2025, 20).is_none());
        assert!(yoy_trend(&[], 2026, 20).is_none());
    }

    #[test]
    fn trend_score_maps_around_fifty() {
        assert_eq!(trend_score(None), 50.0);
        assert_eq!(trend_score(Some(0.0)), 50.0);
        assert_eq!(trend_score(Some(-0.55)), 0.0);
        assert_eq!(trend_score(Some(0.5)), 100.0);
    }

    #[test]
    fn funnel_and_catalog_scores() {
        let scorer = StrategyScorer::default();
        assert_eq!(scorer.score_funnel(0.03, 0.08), 100);
        assert_eq!(scorer.score_funnel(0.0, 0.04), 15);
        assert_eq!(scorer.score_catalog(75.0, 10.0, 200_000.0), 100);
        assert_eq!(scorer.score_catalog(30.0, 5.0, 0.0), 31);
    }

    #[test]
    fn collaboration_score() {
        let scorer = StrategyScorer::default();
        assert_eq!(scorer.score_collaborations(2.0, 0.25, 15.0), 100);
        assert_eq!(scorer.score_collaborations(1.0, 0.0, 0.0), 20);
    }

    #[test]
    fn composite_of_perfect_categories_is_100() {
        let scorer = StrategyScorer::default();
        let scores = CategoryScores {
            streaming: 100,
            social: 100,
            collaborations: 100,
            funnel: 100,
            catalog: 100,
        };
        assert_eq!(scorer.composite_score(&scores), 100);
        assert_eq!(scorer.composite_score(&CategoryScores::default()), 0);
    }

    #[test]
    fn composite_weights_each_category() {
        let scorer = StrategyScorer::default();
        let scores = CategoryScores {
            streaming: 50,
            social: 40,
            collaborations: 30,
            funnel: 20,
            catalog: 10,
        };
        // 15 + 10 + 6 + 3 + 1
        assert_eq!(scorer.composite_score(&scores), 35);
    }

    #[test]
    fn every_score_stays_within_bounds() {
        let scorer = StrategyScorer::default();
        let values = [0.0, 0.01, 1.0, 33.0, 1e3, 1e9, f64::MAX];
        for &v in &values {
            let inputs = StrategyInputs {
                streaming: StreamingInputs {
                    monthly_listeners: v,
                    playlist_reach: v,
                    playlist_count: v,
                    avg_popularity: v,
                },
                social: SocialInputs {
                    engagement_rate: v,
                    reach_pct: v,
                    yoy_trend_pct: Some(v),
                },
                collaborations: CollaborationInputs {
                    collab_multiplier: v,
                    collab_ratio: v,
                    collaborator_count: v,
                },
                funnel: FunnelInputs {
                    link_tap_rate: v,
                    profile_visit_rate: v,
                },
                catalog: CatalogInputs {
                    song_count: v,
                    genre_count: v,
                    avg_streams: v,
                },
            };
            let report = scorer.score(&inputs).unwrap();
            assert!(report.composite <= MAX_SCORE);
            assert!(report.categories.iter().all(|c| c.score <= MAX_SCORE));
        }
    }

    #[test]
    fn score_rejects_nan_and_negative_metrics() {
        let scorer = StrategyScorer::default();

        let mut inputs = StrategyInputs::default();
        inputs.streaming.monthly_listeners = f64::NAN;
        assert!(matches!(scorer.score(&inputs), Err(DashError::InvalidInput(_))));

        let mut inputs = StrategyInputs::default();
        inputs.catalog.song_count = -1.0;
        assert!(matches!(scorer.score(&inputs), Err(DashError::InvalidInput(_))));

        let mut inputs = StrategyInputs::default();
        inputs.social.yoy_trend_pct = Some(f64::INFINITY);
        assert!(matches!(scorer.score(&inputs), Err(DashError::InvalidInput(_))));
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(74), ScoreBand::Developing);
        assert_eq!(ScoreBand::from_score(55), ScoreBand::Developing);
        assert_eq!(ScoreBand::from_score(54), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_score(35), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_score(34), ScoreBand::Critical);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Critical);
        assert_eq!(ScoreBand::NeedsWork.label(), "Needs Work");
        assert_eq!(ScoreBand::Developing.color(), "amber");
    }

    #[test]
    fn inputs_from_fixtures() {
        let stats: ArtistStats = serde_json::from_str(
            r#"{"artist": "Jakke",
                "spotify": {"monthly_listeners": 40000, "popularity_score": 30,
                            "current_playlists": 50, "playlist_reach": 800000},
                "cross_platform": {"total_playlists": 0, "playlist_reach": 0}}"#,
        )
        .unwrap();

        let mut first = Track::new("Sugar Tide", "Jakke", 240_000);
        first.genre = Some("Indie Pop".to_string());
        first.popularity = Some(40);
        let mut second = Track::new("Hurricane", "Jakke", 160_000);
        second.genre = Some("indie pop ".to_string());
        second.popularity = Some(20);

        let social = SocialInsights {
            account: SocialAccount {
                followers: 20_000,
                posts_count: 500,
            },
            overview: SocialOverview {
                accounts_reached: 5_000,
                interactions: 1_000,
                profile_visits: 400,
                external_link_taps: 4,
                ..Default::default()
            },
            yearly: vec![year(2024, 89, 200.0), year(2025, 106, 100.0)],
            collaborations: CollaborationStats {
                solo_posts: 75,
                solo_avg_likes: 100.0,
                collab_posts: 25,
                collab_avg_likes: 250.0,
                collaborators: 12,
            },
        };

        let inputs = StrategyInputs::from_fixtures(&stats, &[first, second], &social, 2026, 20);

        assert_eq!(inputs.streaming.monthly_listeners, 40_000.0);
        assert_eq!(inputs.streaming.playlist_count, 50.0);
        assert_eq!(inputs.streaming.playlist_reach, 800_000.0);
        assert_eq!(inputs.streaming.avg_popularity, 30.0);
        assert_eq!(inputs.social.engagement_rate, 0.05);
        assert_eq!(inputs.social.reach_pct, 0.25);
        assert_eq!(inputs.social.yoy_trend_pct, Some(-0.5));
        assert_eq!(inputs.collaborations.collab_multiplier, 2.5);
        assert_eq!(inputs.collaborations.collab_ratio, 0.25);
        assert_eq!(inputs.funnel.link_tap_rate, 0.01);
        assert_eq!(inputs.funnel.profile_visit_rate, 0.08);
        assert_eq!(inputs.catalog.song_count, 2.0);
        assert_eq!(inputs.catalog.genre_count, 1.0);
        assert_eq!(inputs.catalog.avg_streams, 200_000.0);
    }

    #[test]
    fn empty_fixtures_do_not_divide_by_zero() {
        let stats: ArtistStats = serde_json::from_str(r#"{"artist": "Nobody"}"#).unwrap();
        let inputs =
            StrategyInputs::from_fixtures(&stats, &[], &SocialInsights::default(), 2026, 20);
        inputs.validate().unwrap();

        let report = StrategyScorer::default().score(&inputs).unwrap();
        // Only the flat short-form term and the neutral trend contribute.
        assert_eq!(report.categories[1].score, 30);
        assert_eq!(report.composite, 7);
    }
}
