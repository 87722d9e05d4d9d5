//! 物件区分の分類
//!
//! 区分文字列から表示用の色クラス・アイコン・表示フィールドを決める。
//! 未知の区分はニュートラルな表示にフォールバックする。

use serde::{Deserialize, Serialize};

/// 「すべて」を表すセンチネル
pub const ALL_CATEGORIES: &str = "All";

/// 既知の区分
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Rent,
    Buy,
    OffPlan,
    CommercialRent,
    CommercialBuy,
    Other(String),
}

impl Category {
    /// フィルタタブに並べる区分（表示順）
    pub const KNOWN: [Category; 5] = [
        Category::Rent,
        Category::Buy,
        Category::OffPlan,
        Category::CommercialRent,
        Category::CommercialBuy,
    ];

    /// 区分文字列を解釈（完全一致）
    pub fn from_label(label: &str) -> Self {
        match label {
            "Rent" => Category::Rent,
            "Buy" => Category::Buy,
            "Off Plan" => Category::OffPlan,
            "Commercial for Rent" => Category::CommercialRent,
            "Commercial for Buy" => Category::CommercialBuy,
            other => Category::Other(other.to_string()),
        }
    }

    /// バックエンドが使う区分文字列
    pub fn label(&self) -> &str {
        match self {
            Category::Rent => "Rent",
            Category::Buy => "Buy",
            Category::OffPlan => "Off Plan",
            Category::CommercialRent => "Commercial for Rent",
            Category::CommercialBuy => "Commercial for Buy",
            Category::Other(label) => label,
        }
    }

    pub fn is_off_plan(&self) -> bool {
        matches!(self, Category::OffPlan)
    }
}

/// カードに表示しうるフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Address,
    Developer,
    CompletionDate,
    Tags,
    Bedrooms,
    Size,
}

const OFF_PLAN_FIELDS: &[CardField] = &[
    CardField::Developer,
    CardField::CompletionDate,
    CardField::Tags,
];

const LISTING_FIELDS: &[CardField] = &[
    CardField::Address,
    CardField::Tags,
    CardField::Bedrooms,
    CardField::Size,
];

/// 区分ごとの表示記述子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub color_class: &'static str,
    pub icon: &'static str,
    pub visible_fields: &'static [CardField],
}

impl Presentation {
    pub fn shows(&self, field: CardField) -> bool {
        self.visible_fields.contains(&field)
    }
}

/// ニュートラルな表示
pub const NEUTRAL: Presentation = Presentation {
    color_class: "badge badge--neutral",
    icon: "tag",
    visible_fields: LISTING_FIELDS,
};

/// 区分文字列を表示記述子に変換する
///
/// どんな入力でも失敗しない。
pub fn classify(label: &str) -> Presentation {
    presentation_for(&Category::from_label(label))
}

pub fn presentation_for(category: &Category) -> Presentation {
    match category {
        Category::Rent => Presentation {
            color_class: "badge badge--rent",
            icon: "key",
            visible_fields: LISTING_FIELDS,
        },
        Category::Buy => Presentation {
            color_class: "badge badge--buy",
            icon: "home",
            visible_fields: LISTING_FIELDS,
        },
        Category::OffPlan => Presentation {
            color_class: "badge badge--offplan",
            icon: "crane",
            visible_fields: OFF_PLAN_FIELDS,
        },
        Category::CommercialRent => Presentation {
            color_class: "badge badge--commercial-rent",
            icon: "store",
            visible_fields: LISTING_FIELDS,
        },
        Category::CommercialBuy => Presentation {
            color_class: "badge badge--commercial-buy",
            icon: "building",
            visible_fields: LISTING_FIELDS,
        },
        Category::Other(_) => NEUTRAL,
    }
}

/// フィルタタブ用のラベル一覧（先頭は "All"）
pub const FILTER_TABS: [&str; 6] = [
    ALL_CATEGORIES,
    "Rent",
    "Buy",
    "Off Plan",
    "Commercial for Rent",
    "Commercial for Buy",
];
