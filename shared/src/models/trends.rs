//! Social media trend models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Social-platform trend scores for one menu item
///
/// Scores depend on status: Trending scores land in [10, 100], everything
/// else in [0, 40].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRecord {
    pub menuitem: String,
    pub date: NaiveDate,
    pub facebook_status: TrendStatus,
    pub facebook_score: i64,
    pub instagram_status: TrendStatus,
    pub instagram_score: i64,
    pub tiktok_status: TrendStatus,
    pub tiktok_score: i64,
    pub twitter_status: TrendStatus,
    pub twitter_score: i64,
}

impl TrendRecord {
    /// Platform name / status pairs in a fixed platform order
    pub fn platform_statuses(&self) -> [(&'static str, TrendStatus); 4] {
        [
            ("Facebook", self.facebook_status),
            ("Instagram", self.instagram_status),
            ("Tiktok", self.tiktok_status),
            ("Twitter", self.twitter_status),
        ]
    }

    /// Status / score pairs, same platform order as `platform_statuses`
    pub fn platform_scores(&self) -> [(TrendStatus, i64); 4] {
        [
            (self.facebook_status, self.facebook_score),
            (self.instagram_status, self.instagram_score),
            (self.tiktok_status, self.tiktok_score),
            (self.twitter_status, self.twitter_score),
        ]
    }
}

/// Trend status on one platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendStatus {
    Trending,
    #[serde(rename = "Non-Trending")]
    NonTrending,
    Similar,
}

impl TrendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendStatus::Trending => "Trending",
            TrendStatus::NonTrending => "Non-Trending",
            TrendStatus::Similar => "Similar",
        }
    }
}
