use crate::config::tables::{PlatformShare, RevenueTables, OTHER_PLATFORM};
use crate::domain::Track;
use crate::error::{ensure_metric, DashError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;
use tracing::{debug, warn};

/// Titles at least this similar to a listed title are reported as likely renames.
const NEAR_MISS_SIMILARITY: f64 = 0.85;

/// Longest projection horizon accepted, ten years.
pub const MAX_PROJECTION_MONTHS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRevenue {
    pub platform: String,
    pub streams: u64,
    pub revenue: f64,
    pub rate: f64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEstimate {
    pub total_streams: u64,
    pub estimated_revenue: f64,
    pub platform_breakdown: Vec<PlatformRevenue>,
    /// Effective payout per stream across all platforms.
    pub blended_rate: f64,
}

impl RevenueEstimate {
    pub fn platform(&self, name: &str) -> Option<&PlatformRevenue> {
        self.platform_breakdown.iter().find(|p| p.platform == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamTarget {
    pub platform: String,
    pub monthly_streams: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRevenue {
    pub song: String,
    pub artist: String,
    pub spotify_streams: u64,
    pub est_total_streams: u64,
    pub est_revenue: f64,
    pub ownership_split: f64,
    pub artist_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRevenue {
    /// Sorted by the artist's share, highest first.
    pub tracks: Vec<TrackRevenue>,
    pub total_est_revenue: f64,
    pub total_artist_revenue: f64,
    pub average_split: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMonth {
    pub month: u32,
    pub monthly_streams: u64,
    pub monthly_revenue: f64,
    pub artist_monthly_revenue: f64,
    pub cumulative_streams: u64,
    pub cumulative_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRevenue {
    pub project: String,
    pub revenue: RevenueEstimate,
}

/// Each artist project priced on its own, plus their streams priced together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRevenue {
    pub projects: Vec<ProjectRevenue>,
    pub combined: RevenueEstimate,
}

impl CombinedRevenue {
    pub fn project(&self, name: &str) -> Option<&RevenueEstimate> {
        self.projects
            .iter()
            .find(|p| p.project == name)
            .map(|p| &p.revenue)
    }
}

pub struct RevenueEstimator {
    tables: RevenueTables,
}

impl RevenueEstimator {
    pub fn new(tables: RevenueTables) -> Self {
        Self { tables }
    }

    /// Spreads `total_streams` over the platform shares and prices each bucket
    /// at its per-stream rate. Unlisted platforms are priced at the "Other" rate.
    pub fn estimate_revenue(
        &self,
        total_streams: u64,
        platform_share: Option<&[PlatformShare]>,
    ) -> RevenueEstimate {
        let shares = platform_share
            .filter(|s| !s.is_empty())
            .unwrap_or(self.tables.shares.as_slice());

        let mut platform_breakdown = Vec::with_capacity(shares.len());
        let mut estimated_revenue = 0.0;

        for entry in shares {
            let streams = (total_streams as f64 * entry.share).floor() as u64;
            let rate = self.tables.rate_or_other(&entry.platform);
            let revenue = streams as f64 * rate;
            estimated_revenue += revenue;

            platform_breakdown.push(PlatformRevenue {
                platform: entry.platform.clone(),
                streams,
                revenue,
                rate,
                share: entry.share,
            });
        }

        let blended_rate = if total_streams > 0 {
            estimated_revenue / total_streams as f64
        } else {
            0.0
        };

        RevenueEstimate {
            total_streams,
            estimated_revenue,
            platform_breakdown,
            blended_rate,
        }
    }

    /// The primary artist's share of `song_title`, 1.0 when the title is not listed.
    ///
    /// Matching is exact. An unlisted title that closely resembles a listed one
    /// is logged, but still counts as fully owned.
    pub fn get_ownership_split(&self, song_title: &str) -> f64 {
        if let Some(split) = self.tables.ownership.lookup(song_title) {
            return split;
        }

        if let Some(listed) = self.near_miss(song_title) {
            warn!(
                "\"{}\" has no ownership entry but resembles \"{}\"; assuming full ownership",
                song_title, listed
            );
        }

        self.tables.ownership.get_or_full(song_title)
    }

    fn near_miss(&self, song_title: &str) -> Option<&str> {
        let lowered = song_title.to_lowercase();
        self.tables
            .ownership
            .titles()
            .map(|t| (t, normalized_levenshtein(&lowered, &t.to_lowercase())))
            .filter(|(_, score)| *score >= NEAR_MISS_SIMILARITY)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(t, _)| t)
    }

    /// Cross-platform total implied by a Spotify-only count.
    pub fn inferred_total_streams(&self, spotify_streams: u64) -> u64 {
        (spotify_streams as f64 / self.tables.observed_share).floor() as u64
    }

    pub fn track_revenue(&self, track: &Track) -> TrackRevenue {
        let est_total_streams = self.inferred_total_streams(track.streams);
        let est_revenue = self
            .estimate_revenue(est_total_streams, None)
            .estimated_revenue;
        let ownership_split = self.get_ownership_split(&track.song);

        TrackRevenue {
            song: track.song.clone(),
            artist: track.artist.clone(),
            spotify_streams: track.streams,
            est_total_streams,
            est_revenue,
            ownership_split,
            artist_revenue: est_revenue * ownership_split,
        }
    }

    pub fn catalog_revenue(&self, tracks: &[Track]) -> CatalogRevenue {
        let mut track_revenues: Vec<TrackRevenue> = tracks
            .par_iter()
            .map(|track| self.track_revenue(track))
            .collect();

        track_revenues.sort_by(|a, b| b.artist_revenue.total_cmp(&a.artist_revenue));

        let total_est_revenue: f64 = track_revenues.iter().map(|t| t.est_revenue).sum();
        let total_artist_revenue: f64 = track_revenues.iter().map(|t| t.artist_revenue).sum();
        let average_split = if total_est_revenue > 0.0 {
            total_artist_revenue / total_est_revenue
        } else {
            1.0
        };

        debug!(
            "Catalog revenue over {} tracks: ${:.2} gross, ${:.2} to the artist",
            track_revenues.len(),
            total_est_revenue,
            total_artist_revenue
        );

        CatalogRevenue {
            tracks: track_revenues,
            total_est_revenue,
            total_artist_revenue,
            average_split,
        }
    }

    /// Streams needed per month on each platform alone to earn a twelfth of
    /// `annual_target`. The "Other" bucket is skipped.
    pub fn monthly_revenue_target(&self, annual_target: f64) -> Result<Vec<StreamTarget>> {
        let annual_target = ensure_metric("annual target", annual_target)?;
        let monthly = annual_target / 12.0;

        Ok(self
            .tables
            .rates
            .iter()
            .filter(|r| r.platform != OTHER_PLATFORM)
            .map(|r| StreamTarget {
                platform: r.platform.clone(),
                monthly_streams: (monthly / r.rate).floor() as u64,
            })
            .collect())
    }

    /// Prices every `(project, streams)` pair and the sum of their streams.
    pub fn combined_revenue(&self, projects: &[(&str, u64)]) -> Result<CombinedRevenue> {
        let combined_streams = projects
            .iter()
            .try_fold(0u64, |acc, (_, streams)| acc.checked_add(*streams))
            .ok_or_else(|| {
                DashError::InvalidInput("combined project streams overflow".to_string())
            })?;

        Ok(CombinedRevenue {
            projects: projects
                .iter()
                .map(|(project, streams)| ProjectRevenue {
                    project: project.to_string(),
                    revenue: self.estimate_revenue(*streams, None),
                })
                .collect(),
            combined: self.estimate_revenue(combined_streams, None),
        })
    }

    /// Month-by-month cumulative revenue starting from `baseline_streams`, adding
    /// `monthly_spotify_streams` (scaled up to a cross-platform total) each month.
    pub fn project(
        &self,
        baseline_streams: u64,
        monthly_spotify_streams: u64,
        months: u32,
        average_split: f64,
    ) -> Result<Vec<ProjectionMonth>> {
        let average_split = ensure_metric("average split", average_split)?;
        if months > MAX_PROJECTION_MONTHS {
            return Err(DashError::InvalidInput(format!(
                "projection of {} months exceeds the {} month limit",
                months, MAX_PROJECTION_MONTHS
            )));
        }

        let monthly_streams = self.inferred_total_streams(monthly_spotify_streams);
        let monthly_revenue = self
            .estimate_revenue(monthly_streams, None)
            .estimated_revenue;

        let mut cumulative_streams = baseline_streams;
        let mut cumulative_revenue = self
            .estimate_revenue(baseline_streams, None)
            .estimated_revenue;

        let mut projection = Vec::with_capacity(months as usize);
        for month in 1..=months {
            cumulative_streams = cumulative_streams
                .checked_add(monthly_streams)
                .ok_or_else(|| {
                    DashError::InvalidInput(format!(
                        "cumulative streams overflow in month {}",
                        month
                    ))
                })?;
            cumulative_revenue += monthly_revenue;
            projection.push(ProjectionMonth {
                month,
                monthly_streams,
                monthly_revenue,
                artist_monthly_revenue: monthly_revenue * average_split,
                cumulative_streams,
                cumulative_revenue,
            });
        }

        Ok(projection)
    }
}

impl Default for RevenueEstimator {
    fn default() -> Self {
        Self::new(RevenueTables::default())
    }
}
