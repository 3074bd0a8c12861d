//! Generic data-view engine shared by every report
//!
//! Each report runs the same cycle over freshly loaded records:
//! filter (case-insensitive text OR-match, AND an optional exact date),
//! then a page slice for the table and group-sums over the full filtered
//! set for the charts. Views differ only in which fields they designate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use shared::types::{PaginatedResponse, Pagination, PaginationMeta};

/// Query parameters common to the table views
///
/// `date` arrives as the raw dropdown value; an empty or unparseable
/// selection means "no date filter". A non-numeric `page` coerces to 1.
#[derive(Debug, Clone, Deserialize)]
pub struct TableQuery {
    pub filter: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: u32,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            filter: None,
            date: None,
            page: 1,
        }
    }
}

fn default_page() -> u32 {
    1
}

/// Accept any representation of the page control's value, falling back to
/// page 1 instead of rejecting the request.
pub fn lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PageVisitor;

    impl serde::de::Visitor<'_> for PageVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a page number")
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<u32, E> {
            Ok(value
                .trim()
                .parse::<f64>()
                .ok()
                .map(coerce_page)
                .unwrap_or(1))
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<u32, E> {
            Ok(coerce_page(value as f64))
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<u32, E> {
            Ok(coerce_page(value as f64))
        }

        fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<u32, E> {
            Ok(coerce_page(value))
        }
    }

    deserializer.deserialize_any(PageVisitor)
}

fn coerce_page(value: f64) -> u32 {
    if value.is_finite() && value >= 1.0 {
        value.min(u32::MAX as f64) as u32
    } else {
        1
    }
}

/// Accept an empty or malformed dropdown value as "no date filter"
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}

/// Case-insensitive substring test; `needle_lower` must already be
/// lowercased (done once per request, not once per row)
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Filter stage: keep rows passing the text predicate AND the exact date
/// match, preserving input order
///
/// `matches_text` receives the lowercased needle and decides which fields
/// the view searches. An absent condition passes everything.
pub fn filter_rows<T, M, D>(
    rows: Vec<T>,
    filter_text: Option<&str>,
    date: Option<NaiveDate>,
    matches_text: M,
    row_date: D,
) -> Vec<T>
where
    M: Fn(&T, &str) -> bool,
    D: Fn(&T) -> Option<NaiveDate>,
{
    let needle = filter_text
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    rows.into_iter()
        .filter(|row| {
            let text_ok = needle.as_deref().map_or(true, |n| matches_text(row, n));
            let date_ok = date.map_or(true, |d| row_date(row) == Some(d));
            text_ok && date_ok
        })
        .collect()
}

/// Pagination stage: slice the filtered set into one page
///
/// The requested page clamps into `[1, total_pages]` before slicing and the
/// clamped value is echoed in the metadata. An empty set yields one empty
/// page, never an error.
pub fn paginate<T>(rows: Vec<T>, pagination: &Pagination) -> PaginatedResponse<T> {
    let per_page = pagination.per_page.max(1);
    let total_items = rows.len() as u64;
    let total_pages = (total_items.div_ceil(per_page as u64)).max(1) as u32;
    let page = pagination.page.clamp(1, total_pages);

    let offset = (page as u64 - 1) * per_page as u64;
    let data = rows
        .into_iter()
        .skip(offset as usize)
        .take(per_page as usize)
        .collect();

    PaginatedResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total_items,
            total_pages,
        },
    }
}

/// Group total keyed by a text field, ranked descending by value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: Decimal,
}

/// Group total keyed by date, ordered ascending by date
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

/// Group total keyed by (date, text field), ordered by date then key
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateKeyTotal {
    pub date: NaiveDate,
    pub key: String,
    pub total: Decimal,
}

/// Aggregation stage: sum `value` per distinct `key`, descending by total
///
/// Each distinct key appears exactly once. Empty input yields empty output.
pub fn sum_by_key<T, K, V>(rows: &[T], key: K, value: V) -> Vec<GroupTotal>
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> Decimal,
{
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for row in rows {
        *totals.entry(key(row)).or_insert(Decimal::ZERO) += value(row);
    }

    let mut ranked: Vec<GroupTotal> = totals
        .into_iter()
        .map(|(key, total)| GroupTotal { key, total })
        .collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked
}

/// Aggregation stage: sum `value` per distinct date, ascending by date
pub fn sum_by_date<T, D, V>(rows: &[T], date: D, value: V) -> Vec<DateTotal>
where
    D: Fn(&T) -> NaiveDate,
    V: Fn(&T) -> Decimal,
{
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for row in rows {
        *totals.entry(date(row)).or_insert(Decimal::ZERO) += value(row);
    }

    totals
        .into_iter()
        .map(|(date, total)| DateTotal { date, total })
        .collect()
}

/// Two-key variant backing the per-item time-series charts: sum `value`
/// per (date, key), ordered by date then key
pub fn sum_by_date_and_key<T, D, K, V>(rows: &[T], date: D, key: K, value: V) -> Vec<DateKeyTotal>
where
    D: Fn(&T) -> NaiveDate,
    K: Fn(&T) -> String,
    V: Fn(&T) -> Decimal,
{
    let mut totals: BTreeMap<(NaiveDate, String), Decimal> = BTreeMap::new();
    for row in rows {
        *totals
            .entry((date(row), key(row)))
            .or_insert(Decimal::ZERO) += value(row);
    }

    totals
        .into_iter()
        .map(|((date, key), total)| DateKeyTotal { date, key, total })
        .collect()
}

/// Distinct dates present in the rows, ascending; feeds the date dropdowns
pub fn distinct_dates<T, D>(rows: &[T], date: D) -> Vec<NaiveDate>
where
    D: Fn(&T) -> NaiveDate,
{
    let mut dates: Vec<NaiveDate> = rows.iter().map(date).collect();
    dates.sort();
    dates.dedup();
    dates
}
