//! 登録・更新リクエストの本文
//!
//! `None` のフィールドは送らない。更新は指定したフィールドだけを書き換える。

use crate::error::{Error, Result};
use crate::types::{Banner, BannerKind, Price, PropertyRecord};
use serde::{Deserialize, Serialize};

/// 物件の登録・更新内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDraft {
    /// 既存レコードから編集フォームの初期値を作る
    pub fn from_record(record: &PropertyRecord) -> Self {
        Self {
            title: optional_text(&record.title),
            category: record.category.clone(),
            location: record.location.clone(),
            price: record.price.clone(),
            image: record.primary_image().map(str::to_string),
            developer: record.developer.clone(),
            completion_date: record.completion_date.clone(),
            tags: (!record.tags.is_empty()).then(|| record.tags.clone()),
            bedrooms: record.bedrooms,
            size: record.size,
            agent: record.agent.clone(),
            description: record.description.clone(),
        }
    }

    /// 変更が1つも無い
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `original` から変わったフィールドだけを残す（空にした項目は送らない）
    pub fn changes_from(&self, original: &PropertyDraft) -> PropertyDraft {
        PropertyDraft {
            title: changed(&self.title, &original.title),
            category: changed(&self.category, &original.category),
            location: changed(&self.location, &original.location),
            price: changed(&self.price, &original.price),
            image: changed(&self.image, &original.image),
            developer: changed(&self.developer, &original.developer),
            completion_date: changed(&self.completion_date, &original.completion_date),
            tags: changed(&self.tags, &original.tags),
            bedrooms: changed(&self.bedrooms, &original.bedrooms),
            size: changed(&self.size, &original.size),
            agent: changed(&self.agent, &original.agent),
            description: changed(&self.description, &original.description),
        }
    }

    /// 新規登録に必要な項目（タイトル・区分）の確認
    pub fn validate_new(&self) -> Result<()> {
        if self.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Err(Error::Validation("Title is required".into()));
        }
        if self.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
            return Err(Error::Validation("Category is required".into()));
        }
        Ok(())
    }

    /// 更新時の確認（空の更新は送らない）
    pub fn validate_update(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::Validation("Nothing to update".into()));
        }
        Ok(())
    }
}

/// バナーの登録・更新内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<BannerKind>,
}

impl BannerDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// 新規登録には画像と種別が要る
    pub fn validate_new(&self) -> Result<()> {
        if self.image.as_deref().map_or(true, |i| i.trim().is_empty()) {
            return Err(Error::Validation("Banner image is required".into()));
        }
        if self.kind.is_none() {
            return Err(Error::Validation("Banner type is required".into()));
        }
        Ok(())
    }

    pub fn validate_update(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::Validation("Nothing to update".into()));
        }
        Ok(())
    }

    /// 既存バナーとの差分
    pub fn changes_from(&self, original: &Banner) -> BannerDraft {
        BannerDraft {
            title: changed(&self.title, &original.title),
            image: changed(&self.image, &Some(original.image.clone())),
            link: changed(&self.link, &original.link),
            kind: changed(&self.kind, &Some(original.kind)),
        }
    }
}

fn changed<T: Clone + PartialEq>(current: &Option<T>, original: &Option<T>) -> Option<T> {
    if current == original {
        None
    } else {
        current.clone()
    }
}

/// 前後の空白を除き、空なら None
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// カンマ区切りのタグ
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .filter_map(optional_text)
        .collect()
}

/// 価格入力（数値として読めれば数値、そうでなければ文字列のまま）
pub fn price_from_input(input: &str) -> Option<Price> {
    let text = optional_text(input)?;
    let plain: String = text.chars().filter(|c| *c != ',').collect();
    Some(match plain.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Price::Amount(amount),
        _ => Price::Text(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_sends_only_given_fields() {
        let draft = PropertyDraft {
            price: Some(Price::Amount(950_000.0)),
            bedrooms: Some(2),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).expect("シリアライズ失敗");
        assert_eq!(json, serde_json::json!({ "price": 950000.0, "bedrooms": 2 }));
    }

    #[test]
    fn test_category_is_sent_as_type() {
        let draft = PropertyDraft {
            title: Some("Creek Rise".into()),
            category: Some("Off Plan".into()),
            completion_date: Some("Q2 2028".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).expect("シリアライズ失敗");
        assert_eq!(json["type"], "Off Plan");
        assert_eq!(json["completionDate"], "Q2 2028");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_validate_new_requires_title_and_category() {
        let mut draft = PropertyDraft::default();
        assert!(matches!(draft.validate_new(), Err(Error::Validation(_))));

        draft.title = Some("  ".into());
        draft.category = Some("Rent".into());
        assert!(draft.validate_new().is_err());

        draft.title = Some("Loft".into());
        assert!(draft.validate_new().is_ok());
    }

    #[test]
    fn test_empty_update_is_rejected() {
        assert!(PropertyDraft::default().validate_update().is_err());
        assert!(BannerDraft::default().validate_update().is_err());

        let draft = PropertyDraft { title: Some("New title".into()), ..Default::default() };
        assert!(draft.validate_update().is_ok());
    }

    #[test]
    fn test_from_record_prefills_form() {
        let record = PropertyRecord {
            id: "p1".into(),
            title: "Marina Vista".into(),
            category: Some("Buy".into()),
            images: vec!["https://cdn.example.com/1.jpg".into()],
            tags: vec!["Sea View".into()],
            bedrooms: Some(3),
            ..Default::default()
        };
        let draft = PropertyDraft::from_record(&record);
        assert_eq!(draft.title.as_deref(), Some("Marina Vista"));
        assert_eq!(draft.image.as_deref(), Some("https://cdn.example.com/1.jpg"));
        assert_eq!(draft.tags, Some(vec!["Sea View".to_string()]));
        assert_eq!(draft.bedrooms, Some(3));
        assert!(draft.developer.is_none());
    }

    #[test]
    fn test_changes_from_keeps_only_edited_fields() {
        let record = PropertyRecord {
            id: "p1".into(),
            title: "Marina Vista".into(),
            category: Some("Buy".into()),
            bedrooms: Some(3),
            ..Default::default()
        };
        let original = PropertyDraft::from_record(&record);

        let mut edited = original.clone();
        edited.bedrooms = Some(4);
        edited.location = Some("Dubai Marina".into());

        let changes = edited.changes_from(&original);
        assert_eq!(changes.bedrooms, Some(4));
        assert_eq!(changes.location.as_deref(), Some("Dubai Marina"));
        assert!(changes.title.is_none());
        assert!(changes.category.is_none());

        assert!(original.changes_from(&original).validate_update().is_err());
    }

    #[test]
    fn test_banner_changes_from() {
        let banner = Banner {
            id: "b1".into(),
            title: Some("Launch".into()),
            image: "https://cdn.example.com/b.jpg".into(),
            link: None,
            kind: BannerKind::Home,
        };
        let edited = BannerDraft {
            title: Some("Launch".into()),
            image: Some("https://cdn.example.com/b.jpg".into()),
            link: Some("/off-plan".into()),
            kind: Some(BannerKind::Offplan),
        };
        let changes = edited.changes_from(&banner);
        assert_eq!(changes.link.as_deref(), Some("/off-plan"));
        assert_eq!(changes.kind, Some(BannerKind::Offplan));
        assert!(changes.title.is_none());
        assert!(changes.image.is_none());
    }

    #[test]
    fn test_banner_draft() {
        let mut draft = BannerDraft {
            image: Some("https://cdn.example.com/b.jpg".into()),
            ..Default::default()
        };
        assert!(draft.validate_new().is_err());

        draft.kind = Some(BannerKind::Offplan);
        assert!(draft.validate_new().is_ok());

        let json = serde_json::to_value(&draft).expect("シリアライズ失敗");
        assert_eq!(json["type"], "offplan");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn test_input_helpers() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" Dubai "), Some("Dubai".to_string()));
        assert_eq!(parse_tags("Sea View, , Pool ,"), vec!["Sea View", "Pool"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_price_from_input() {
        assert_eq!(price_from_input("1,250,000"), Some(Price::Amount(1_250_000.0)));
        assert_eq!(price_from_input("AED 90k"), Some(Price::Text("AED 90k".into())));
        assert_eq!(price_from_input(" "), None);
    }
}
