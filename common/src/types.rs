//! バックエンドから受け取るレコードの型定義
//!
//! Web(WASM)とCLIで共有される型:
//! - PropertyRecord: 物件
//! - Agent / AgentAuthStatus: エージェント
//! - Banner: トップ・Off Planページのバナー
//!
//! 任意フィールドはすべて`Option`で表現し、存在チェックを型で行う。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 価格（文字列・数値どちらでも届く）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// 数値として読める場合はその値を返す
    ///
    /// "AED 1,250,000" のような文字列は数字と小数点だけを拾って解釈する。
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(value) => Some(*value),
            Price::Text(text) => {
                let digits: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                if digits.is_empty() {
                    None
                } else {
                    digits.parse().ok()
                }
            }
        }
    }

    /// 表示用ラベル
    pub fn label(&self) -> String {
        match self {
            Price::Amount(value) => format_amount(*value),
            Price::Text(text) => text.trim().to_string(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// 3桁区切りで整形（小数部がある場合は2桁まで）
fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if value < 0.0 && cents > 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if fraction > 0 {
        grouped.push_str(&format!(".{:02}", fraction));
    }
    grouped
}

/// 物件レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// 区分（Rent / Buy / Off Plan / Commercial for Rent / Commercial for Buy ...）
    #[serde(default, alias = "type")]
    pub category: Option<String>,

    #[serde(default, alias = "address")]
    pub location: Option<String>,

    #[serde(default)]
    pub price: Option<Price>,

    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    /// デベロッパー（Off Plan）
    #[serde(default)]
    pub developer: Option<String>,

    /// 竣工予定日（Off Plan）
    #[serde(default)]
    pub completion_date: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub bedrooms: Option<u32>,

    /// 面積（sq.ft）
    #[serde(default)]
    pub size: Option<f64>,

    /// 掲載エージェントID
    #[serde(default)]
    pub agent: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl PropertyRecord {
    /// カード表示に使う画像（`image` が無ければ `images` の先頭）
    pub fn primary_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
            .filter(|s| !s.trim().is_empty())
    }

    /// 区分文字列（未設定なら空文字）
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

/// エージェントの状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Inactive => "inactive",
            AgentStatus::Unknown => "unknown",
        }
    }
}

/// エージェント
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub status: AgentStatus,

    #[serde(default)]
    pub properties_count: Option<u32>,
}

/// `GET /api/agents/auth-status` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentAuthStatus {
    pub authenticated: bool,
    pub agent: Option<Agent>,
}

/// バナー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Home,
    Offplan,
}

impl BannerKind {
    /// クエリパラメータ `?type=` の値
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerKind::Home => "home",
            BannerKind::Offplan => "offplan",
        }
    }
}

impl std::str::FromStr for BannerKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(BannerKind::Home),
            "offplan" | "off-plan" | "off plan" => Ok(BannerKind::Offplan),
            other => Err(crate::Error::Config(format!("unknown banner type: {}", other))),
        }
    }
}

/// バナー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, alias = "imageUrl")]
    pub image: String,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(rename = "type")]
    pub kind: BannerKind,
}
