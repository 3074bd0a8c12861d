//! Social media trends service
//!
//! The trends document is optional: a missing file regenerates synthetic
//! platform scores from the current menu instead of failing the view.

use chrono::{Local, NaiveDate};
use rand::Rng;

use shared::models::{TrendRecord, TrendStatus};

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Social trends service
#[derive(Clone)]
pub struct TrendsService {
    store: DataStore,
}

impl TrendsService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Load the trend records, regenerating them if the document is missing
    pub fn report(&self) -> AppResult<Vec<TrendRecord>> {
        match self.store.load_trends() {
            Ok(records) => Ok(records),
            Err(AppError::DocumentNotFound(_)) => {
                tracing::info!("trends document missing, generating fresh scores");
                self.regenerate()
            }
            Err(err) => Err(err),
        }
    }

    /// Rewrite the trends document with fresh scores for every menu item
    pub fn regenerate(&self) -> AppResult<Vec<TrendRecord>> {
        let menu = self.store.load_menu()?;
        let names: Vec<String> = menu.into_iter().map(|item| item.menuitem).collect();
        let records = generate_trends(&names, Local::now().date_naive(), &mut rand::rng());
        self.store.save_trends(&records)?;
        Ok(records)
    }
}

/// Generate one trend record per menu item, dated `date`
///
/// Per platform: status is drawn Trending/Non-Trending/Similar with
/// weights 0.4/0.4/0.2; Trending scores in 10..=100, others in 0..=40.
pub fn generate_trends(menu_items: &[String], date: NaiveDate, rng: &mut impl Rng) -> Vec<TrendRecord> {
    menu_items
        .iter()
        .map(|menuitem| {
            let (facebook_status, facebook_score) = platform_trend(rng);
            let (instagram_status, instagram_score) = platform_trend(rng);
            let (tiktok_status, tiktok_score) = platform_trend(rng);
            let (twitter_status, twitter_score) = platform_trend(rng);
            TrendRecord {
                menuitem: menuitem.clone(),
                date,
                facebook_status,
                facebook_score,
                instagram_status,
                instagram_score,
                tiktok_status,
                tiktok_score,
                twitter_status,
                twitter_score,
            }
        })
        .collect()
}

fn platform_trend(rng: &mut impl Rng) -> (TrendStatus, i64) {
    let roll: f64 = rng.random();
    let status = if roll < 0.4 {
        TrendStatus::Trending
    } else if roll < 0.8 {
        TrendStatus::NonTrending
    } else {
        TrendStatus::Similar
    };
    let score = match status {
        TrendStatus::Trending => rng.random_range(10..=100),
        _ => rng.random_range(0..=40),
    };
    (status, score)
}
