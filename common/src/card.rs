//! 物件カードの表示モデル
//!
//! レコードと分類結果から、カードに出すブロックを組み立てる。
//! 任意フィールドが無いブロックは出さない（空ブロックは作らない）。

use crate::category::{presentation_for, CardField, Category, Presentation};
use crate::types::PropertyRecord;

/// 詳細ページのパス
pub fn detail_path(id: &str) -> String {
    format!("/properties/{}", id)
}

/// カード内の条件付きブロック
#[derive(Debug, Clone, PartialEq)]
pub enum CardBlock {
    Address(String),
    Developer(String),
    CompletionDate(String),
    Tags(Vec<String>),
    Bedrooms(u32),
    Size(f64),
}

impl CardBlock {
    pub fn field(&self) -> CardField {
        match self {
            CardBlock::Address(_) => CardField::Address,
            CardBlock::Developer(_) => CardField::Developer,
            CardBlock::CompletionDate(_) => CardField::CompletionDate,
            CardBlock::Tags(_) => CardField::Tags,
            CardBlock::Bedrooms(_) => CardField::Bedrooms,
            CardBlock::Size(_) => CardField::Size,
        }
    }

    /// ラベル
    pub fn label(&self) -> &'static str {
        match self {
            CardBlock::Address(_) => "Location",
            CardBlock::Developer(_) => "Developer",
            CardBlock::CompletionDate(_) => "Completion",
            CardBlock::Tags(_) => "Tags",
            CardBlock::Bedrooms(_) => "Bedrooms",
            CardBlock::Size(_) => "Size",
        }
    }

    /// 値の表示文字列
    pub fn value(&self) -> String {
        match self {
            CardBlock::Address(s) | CardBlock::Developer(s) | CardBlock::CompletionDate(s) => s.clone(),
            CardBlock::Tags(tags) => tags.join(", "),
            CardBlock::Bedrooms(0) => "Studio".to_string(),
            CardBlock::Bedrooms(n) => n.to_string(),
            CardBlock::Size(sqft) => format!("{} sq.ft", sqft.round() as i64),
        }
    }
}

/// カードの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    View,
    Edit,
    Delete,
}

/// 編集・削除のコールバック（無ければ何もしない）
pub struct CardActions<'a> {
    pub on_edit: Option<&'a dyn Fn(&str)>,
    pub on_delete: Option<&'a dyn Fn(&str)>,
}

impl<'a> CardActions<'a> {
    /// 閲覧のみ（公開ページ）
    pub fn view_only() -> Self {
        Self {
            on_edit: None,
            on_delete: None,
        }
    }

    /// 操作を実行する。`View` は遷移先のパスを返す
    pub fn invoke(&self, action: CardAction, id: &str) -> Option<String> {
        match action {
            CardAction::View => Some(detail_path(id)),
            CardAction::Edit => {
                if let Some(on_edit) = self.on_edit {
                    on_edit(id);
                }
                None
            }
            CardAction::Delete => {
                if let Some(on_delete) = self.on_delete {
                    on_delete(id);
                }
                None
            }
        }
    }

    /// 表示するボタン（View は常に出す）
    pub fn available(&self) -> Vec<CardAction> {
        let mut actions = vec![CardAction::View];
        if self.on_edit.is_some() {
            actions.push(CardAction::Edit);
        }
        if self.on_delete.is_some() {
            actions.push(CardAction::Delete);
        }
        actions
    }
}

/// カード1枚分の表示モデル
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCard {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub presentation: Presentation,
    pub price_label: Option<String>,
    pub image: Option<String>,
    pub blocks: Vec<CardBlock>,
    pub detail_path: String,
}

impl PropertyCard {
    pub fn from_record(record: &PropertyRecord) -> Self {
        let category = Category::from_label(record.category_label());
        let presentation = presentation_for(&category);

        let mut blocks = Vec::new();
        let present = |s: &Option<String>| {
            s.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        if category.is_off_plan() {
            if let Some(developer) = present(&record.developer) {
                blocks.push(CardBlock::Developer(developer));
            }
            if let Some(date) = present(&record.completion_date) {
                blocks.push(CardBlock::CompletionDate(date));
            }
        } else if let Some(address) = present(&record.location) {
            // Off Planでは所在地があっても出さない
            blocks.push(CardBlock::Address(address));
        }

        if let Some(bedrooms) = record.bedrooms {
            blocks.push(CardBlock::Bedrooms(bedrooms));
        }
        if let Some(size) = record.size.filter(|s| s.is_finite() && *s > 0.0) {
            blocks.push(CardBlock::Size(size));
        }

        let tags: Vec<String> = record
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if !tags.is_empty() {
            blocks.push(CardBlock::Tags(tags));
        }

        blocks.retain(|b| presentation.shows(b.field()));

        let title = if record.title.trim().is_empty() {
            "Untitled property".to_string()
        } else {
            record.title.clone()
        };

        Self {
            id: record.id.clone(),
            title,
            presentation,
            price_label: record.price.as_ref().map(|p| p.label()).filter(|l| !l.is_empty()),
            image: record.primary_image().map(str::to_string),
            blocks,
            detail_path: detail_path(&record.id),
            category,
        }
    }

    /// 区分ラベル（未設定なら None）
    pub fn category_label(&self) -> Option<&str> {
        Some(self.category.label()).filter(|l| !l.is_empty())
    }

    pub fn block(&self, field: CardField) -> Option<&CardBlock> {
        self.blocks.iter().find(|b| b.field() == field)
    }
}
