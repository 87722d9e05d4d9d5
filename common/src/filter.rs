//! 物件リストの絞り込み
//!
//! 区分は完全一致（大文字小文字を区別）、検索条件は区分と AND で合成する。

use crate::category::ALL_CATEGORIES;
use crate::types::PropertyRecord;
use serde::{Deserialize, Serialize};

/// 検索条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    /// タイトル・所在地の部分一致（大文字小文字を無視）
    pub text: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
}

impl SearchQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// 条件が何も指定されていない
    pub fn is_empty(&self) -> bool {
        self.needle().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
    }

    fn needle(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// 1件が条件を満たすか
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(needle) = self.needle() {
            let in_title = record.title.to_lowercase().contains(&needle);
            let in_location = record
                .location
                .as_deref()
                .map(|l| l.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !in_title && !in_location {
                return false;
            }
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            // 価格が読めない物件は価格条件があるときだけ除外
            let Some(amount) = record.price.as_ref().and_then(|p| p.amount()) else {
                return false;
            };
            if self.min_price.is_some_and(|min| amount < min) {
                return false;
            }
            if self.max_price.is_some_and(|max| amount > max) {
                return false;
            }
        }

        if let Some(min) = self.min_bedrooms {
            if record.bedrooms.map_or(true, |b| b < min) {
                return false;
            }
        }

        true
    }
}

/// 区分で絞り込む
///
/// `"All"` のときは全件をそのままの順序で返す。
pub fn filter_by_category(records: &[PropertyRecord], selected: &str) -> Vec<PropertyRecord> {
    if selected == ALL_CATEGORIES {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.category.as_deref() == Some(selected))
        .cloned()
        .collect()
}

/// 区分と検索条件の両方で絞り込む
pub fn apply_filters(
    records: &[PropertyRecord],
    selected: &str,
    query: &SearchQuery,
) -> Vec<PropertyRecord> {
    let mut filtered = filter_by_category(records, selected);
    if !query.is_empty() {
        filtered.retain(|r| query.matches(r));
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn record(id: &str, category: &str) -> PropertyRecord {
        PropertyRecord {
            id: id.to_string(),
            title: format!("Listing {}", id),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    fn ids(records: &[PropertyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let records = vec![record("1", "Rent"), record("2", "Off Plan"), record("3", "Buy")];
        let filtered = filter_by_category(&records, ALL_CATEGORIES);
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_exact_match_keeps_relative_order() {
        let records = vec![
            record("1", "Off Plan"),
            record("2", "Rent"),
            record("3", "Off Plan"),
            record("4", "Commercial for Rent"),
        ];
        assert_eq!(ids(&filter_by_category(&records, "Off Plan")), vec!["1", "3"]);
        assert_eq!(ids(&filter_by_category(&records, "Rent")), vec!["2"]);
    }

    #[test]
    fn test_filter_no_partial_or_case_insensitive_match() {
        let records = vec![record("1", "Commercial for Rent"), record("2", "rent")];
        assert!(filter_by_category(&records, "Rent").is_empty());
    }

    #[test]
    fn test_filter_skips_records_without_category() {
        let records = vec![
            PropertyRecord { id: "x".into(), ..Default::default() },
            record("1", "Buy"),
        ];
        assert_eq!(ids(&filter_by_category(&records, "Buy")), vec!["1"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![record("1", "Buy"), record("2", "Rent"), record("3", "Buy")];
        let once = filter_by_category(&records, "Buy");
        let twice = filter_by_category(&once, "Buy");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_text_matches_title_or_location() {
        let mut marina = record("1", "Rent");
        marina.title = "Marina View".into();
        let mut downtown = record("2", "Rent");
        downtown.location = Some("Downtown Dubai".into());
        let records = vec![marina, downtown, record("3", "Rent")];

        let by_title = apply_filters(&records, "Rent", &SearchQuery::text("marina"));
        assert_eq!(ids(&by_title), vec!["1"]);

        let by_location = apply_filters(&records, ALL_CATEGORIES, &SearchQuery::text("DOWNTOWN"));
        assert_eq!(ids(&by_location), vec!["2"]);
    }

    #[test]
    fn test_empty_search_text_matches_all() {
        let records = vec![record("1", "Rent"), record("2", "Rent")];
        let filtered = apply_filters(&records, "Rent", &SearchQuery::text("   "));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_search_composes_with_category() {
        let mut cheap_rent = record("1", "Rent");
        cheap_rent.price = Some(Price::Amount(50_000.0));
        let mut cheap_buy = record("2", "Buy");
        cheap_buy.price = Some(Price::Amount(50_000.0));
        let mut pricey_rent = record("3", "Rent");
        pricey_rent.price = Some(Price::Text("AED 300,000".into()));
        let records = vec![cheap_rent, cheap_buy, pricey_rent];

        let query = SearchQuery { max_price: Some(100_000.0), ..Default::default() };
        assert_eq!(ids(&apply_filters(&records, "Rent", &query)), vec!["1"]);
    }

    #[test]
    fn test_price_bound_excludes_unreadable_price() {
        let mut unknown = record("1", "Buy");
        unknown.price = Some(Price::Text("On request".into()));
        let records = vec![unknown, record("2", "Buy")];

        let query = SearchQuery { min_price: Some(1.0), ..Default::default() };
        assert!(apply_filters(&records, "Buy", &query).is_empty());
        assert_eq!(apply_filters(&records, "Buy", &SearchQuery::default()).len(), 2);
    }

    #[test]
    fn test_min_bedrooms() {
        let mut studio = record("1", "Rent");
        studio.bedrooms = Some(0);
        let mut family = record("2", "Rent");
        family.bedrooms = Some(3);
        let records = vec![studio, family, record("3", "Rent")];

        let query = SearchQuery { min_bedrooms: Some(2), ..Default::default() };
        assert_eq!(ids(&apply_filters(&records, "Rent", &query)), vec!["2"]);
    }
}
