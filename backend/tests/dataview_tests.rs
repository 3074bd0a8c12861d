//! Data-view engine tests
//!
//! Covers the report-view properties:
//! - Filtered output is a subset of the input and matches the predicate
//! - Pagination clamps, slices and stays idempotent under re-clamping
//! - Aggregations keep keys unique and hold their orderings

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::types::Pagination;
use zerobite_backend::services::dataview::{
    contains_ci, distinct_dates, filter_rows, paginate, sum_by_date, sum_by_date_and_key,
    sum_by_key, TableQuery,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::from_str(s).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    name: String,
    category: String,
    date: NaiveDate,
    value: Decimal,
}

fn row(name: &str, category: &str, day: &str, value: &str) -> Row {
    Row {
        name: name.to_string(),
        category: category.to_string(),
        date: date(day),
        value: dec(value),
    }
}

fn sample_rows() -> Vec<Row> {
    vec![
        row("Classic Omelette", "veg", "2025-08-01", "10.00"),
        row("Grilled Chicken Breast", "nonveg", "2025-08-01", "24.00"),
        row("Fruit Salad", "vegan", "2025-08-02", "6.50"),
        row("Fish and Chips", "nonveg", "2025-08-02", "18.00"),
        row("Cheese Sandwich", "veg", "2025-08-03", "8.00"),
    ]
}

fn matches(row: &Row, needle: &str) -> bool {
    contains_ci(&row.name, needle) || contains_ci(&row.category, needle)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Classic Omelette", "omelette"));
        assert!(contains_ci("Classic Omelette", "class"));
        assert!(!contains_ci("Classic Omelette", "chips"));
        // Needle arrives pre-lowercased by the filter stage
        assert!(contains_ci("NONVEG", "nonveg"));
    }

    #[test]
    fn test_filter_matches_either_text_field() {
        let filtered = filter_rows(sample_rows(), Some("veg"), None, matches, |r| Some(r.date));
        // "veg" is a substring of both "veg" and "nonveg", plus "vegan"
        assert_eq!(filtered.len(), 5);

        let filtered = filter_rows(sample_rows(), Some("fish"), None, matches, |r| Some(r.date));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Fish and Chips");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = filter_rows(sample_rows(), Some("OMELETTE"), None, matches, |r| {
            Some(r.date)
        });
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_filter_date_is_exact_match() {
        let filtered = filter_rows(sample_rows(), None, Some(date("2025-08-02")), matches, |r| {
            Some(r.date)
        });
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.date == date("2025-08-02")));
    }

    #[test]
    fn test_filter_conditions_compose_with_and() {
        let filtered = filter_rows(
            sample_rows(),
            Some("nonveg"),
            Some(date("2025-08-02")),
            matches,
            |r| Some(r.date),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Fish and Chips");
    }

    #[test]
    fn test_absent_conditions_pass_through() {
        assert_eq!(
            filter_rows(sample_rows(), None, None, matches, |r| Some(r.date)).len(),
            5
        );
        // Blank and whitespace-only filter text also pass everything
        assert_eq!(
            filter_rows(sample_rows(), Some(""), None, matches, |r| Some(r.date)).len(),
            5
        );
        assert_eq!(
            filter_rows(sample_rows(), Some("   "), None, matches, |r| Some(r.date)).len(),
            5
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        let filtered = filter_rows(sample_rows(), Some("nonveg"), None, matches, |r| {
            Some(r.date)
        });
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Grilled Chicken Breast", "Fish and Chips"]);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        // 22 records, page 3 of 10 holds the final two
        let rows: Vec<i32> = (0..22).collect();
        let page = paginate(rows, &Pagination::new(3, 10));
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_items, 22);
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.data, vec![20, 21]);
    }

    #[test]
    fn test_paginate_empty_set_is_one_empty_page() {
        let rows: Vec<i32> = Vec::new();
        let page = paginate(rows, &Pagination::new(5, 10));
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.page, 1);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let rows: Vec<i32> = (0..25).collect();

        let past_end = paginate(rows.clone(), &Pagination::new(99, 10));
        assert_eq!(past_end.pagination.page, 3);
        assert_eq!(past_end.data, vec![20, 21, 22, 23, 24]);

        let below_start = paginate(rows, &Pagination::new(0, 10));
        assert_eq!(below_start.pagination.page, 1);
        assert_eq!(below_start.data, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn test_paginate_is_idempotent_under_reclamping() {
        let rows: Vec<i32> = (0..22).collect();
        let first = paginate(rows.clone(), &Pagination::new(9, 10));
        let second = paginate(rows, &Pagination::new(first.pagination.page, 10));
        assert_eq!(first.data, second.data);
        assert_eq!(first.pagination.page, second.pagination.page);
    }

    #[test]
    fn test_sum_by_key_ranks_descending() {
        let rows = vec![
            row("Soup", "veg", "2025-08-01", "4.00"),
            row("Steak", "nonveg", "2025-08-01", "20.00"),
            row("Soup", "veg", "2025-08-02", "8.00"),
        ];
        let totals = sum_by_key(&rows, |r| r.name.clone(), |r| r.value);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].key, "Steak");
        assert_eq!(totals[0].total, dec("20.00"));
        assert_eq!(totals[1].key, "Soup");
        assert_eq!(totals[1].total, dec("12.00"));
    }

    #[test]
    fn test_sum_by_key_keys_are_unique() {
        let rows = sample_rows();
        let totals = sum_by_key(&rows, |r| r.category.clone(), |r| r.value);
        let mut keys: Vec<&str> = totals.iter().map(|t| t.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), totals.len());
    }

    #[test]
    fn test_sum_by_date_orders_ascending() {
        let rows = vec![
            row("a", "x", "2025-08-03", "1.00"),
            row("b", "x", "2025-08-01", "2.00"),
            row("c", "x", "2025-08-03", "3.00"),
        ];
        let totals = sum_by_date(&rows, |r| r.date, |r| r.value);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date, date("2025-08-01"));
        assert_eq!(totals[1].date, date("2025-08-03"));
        assert_eq!(totals[1].total, dec("4.00"));
    }

    #[test]
    fn test_aggregations_over_empty_input() {
        let rows: Vec<Row> = Vec::new();
        assert!(sum_by_key(&rows, |r| r.name.clone(), |r| r.value).is_empty());
        assert!(sum_by_date(&rows, |r| r.date, |r| r.value).is_empty());
        assert!(
            sum_by_date_and_key(&rows, |r| r.date, |r| r.name.clone(), |r| r.value).is_empty()
        );
    }

    #[test]
    fn test_sum_by_date_and_key_orders_by_date_then_key() {
        let rows = vec![
            row("b", "x", "2025-08-02", "1.00"),
            row("a", "x", "2025-08-02", "2.00"),
            row("a", "x", "2025-08-01", "3.00"),
        ];
        let totals = sum_by_date_and_key(&rows, |r| r.date, |r| r.name.clone(), |r| r.value);
        let order: Vec<(NaiveDate, &str)> =
            totals.iter().map(|t| (t.date, t.key.as_str())).collect();
        assert_eq!(
            order,
            vec![
                (date("2025-08-01"), "a"),
                (date("2025-08-02"), "a"),
                (date("2025-08-02"), "b"),
            ]
        );
    }

    #[test]
    fn test_distinct_dates_sorted_and_deduped() {
        let rows = sample_rows();
        let dates = distinct_dates(&rows, |r| r.date);
        assert_eq!(
            dates,
            vec![date("2025-08-01"), date("2025-08-02"), date("2025-08-03")]
        );
    }

    #[test]
    fn test_table_query_coerces_bad_page_input() {
        let query: TableQuery = serde_json::from_value(serde_json::json!({
            "filter": "soup",
            "page": "not-a-number"
        }))
        .unwrap();
        assert_eq!(query.page, 1);

        let query: TableQuery =
            serde_json::from_value(serde_json::json!({ "page": "3" })).unwrap();
        assert_eq!(query.page, 3);

        // Float page values truncate
        let query: TableQuery = serde_json::from_value(serde_json::json!({ "page": 2.9 })).unwrap();
        assert_eq!(query.page, 2);

        let query: TableQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_table_query_treats_blank_date_as_no_filter() {
        let query: TableQuery =
            serde_json::from_value(serde_json::json!({ "date": "" })).unwrap();
        assert_eq!(query.date, None);

        let query: TableQuery =
            serde_json::from_value(serde_json::json!({ "date": "2025-08-02" })).unwrap();
        assert_eq!(query.date, Some(date("2025-08-02")));

        let query: TableQuery =
            serde_json::from_value(serde_json::json!({ "date": "yesterday" })).unwrap();
        assert_eq!(query.date, None);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    "[abc ]{0,4}"
}

proptest! {
    /// Every kept row matches the predicate, every dropped row fails it,
    /// and the filtered set is a subsequence of the input.
    #[test]
    fn test_filter_partitions_rows(
        names in prop::collection::vec(text_strategy(), 0..20),
        needle in text_strategy(),
    ) {
        let rows: Vec<(usize, String)> = names.into_iter().enumerate().collect();
        let kept = filter_rows(
            rows.clone(),
            Some(needle.as_str()),
            None,
            |row: &(usize, String), n| contains_ci(&row.1, n),
            |_| None,
        );

        let trimmed = needle.trim().to_lowercase();
        for row in &rows {
            let expected = trimmed.is_empty() || row.1.to_lowercase().contains(&trimmed);
            let present = kept.iter().any(|k| k.0 == row.0);
            prop_assert_eq!(expected, present);
        }

        // Subsequence: indices stay strictly increasing
        let indices: Vec<usize> = kept.iter().map(|k| k.0).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    /// Page metadata stays in range and the echoed page re-paginates to
    /// the same slice.
    #[test]
    fn test_paginate_bounds_and_idempotence(
        total in 0usize..200,
        page in 0u32..60,
        per_page in 1u32..25,
    ) {
        let rows: Vec<usize> = (0..total).collect();
        let first = paginate(rows.clone(), &Pagination::new(page, per_page));

        prop_assert!(first.pagination.page >= 1);
        prop_assert!(first.pagination.page <= first.pagination.total_pages);
        prop_assert!(first.data.len() <= per_page as usize);
        prop_assert_eq!(first.pagination.total_items, total as u64);

        let second = paginate(rows, &Pagination::new(first.pagination.page, per_page));
        prop_assert_eq!(first.data, second.data);
        prop_assert_eq!(first.pagination.page, second.pagination.page);
    }

    /// Concatenating every page reproduces the input exactly.
    #[test]
    fn test_pages_partition_the_rows(
        total in 0usize..150,
        per_page in 1u32..20,
    ) {
        let rows: Vec<usize> = (0..total).collect();
        let total_pages = paginate(rows.clone(), &Pagination::new(1, per_page))
            .pagination
            .total_pages;

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            rebuilt.extend(paginate(rows.clone(), &Pagination::new(page, per_page)).data);
        }
        prop_assert_eq!(rebuilt, rows);
    }

    /// Group sums conserve the grand total regardless of grouping.
    #[test]
    fn test_sum_by_key_conserves_total(
        values in prop::collection::vec((0u8..5, 0i64..1000), 0..30),
    ) {
        let rows: Vec<(String, Decimal)> = values
            .into_iter()
            .map(|(k, v)| (format!("key-{}", k), Decimal::from(v)))
            .collect();
        let totals = sum_by_key(&rows, |r| r.0.clone(), |r| r.1);

        let grand: Decimal = rows.iter().map(|r| r.1).sum();
        let grouped: Decimal = totals.iter().map(|t| t.total).sum();
        prop_assert_eq!(grand, grouped);

        // Ranking is descending
        prop_assert!(totals.windows(2).all(|w| w[0].total >= w[1].total));
    }
}
