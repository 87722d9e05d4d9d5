//! REST APIのエンドポイント定義
//!
//! WebとCLIのクライアントはここでURLとメソッドを組み立てる。

use crate::error::{Error, Result};
use crate::types::BannerKind;
use serde::de::DeserializeOwned;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use url::form_urlencoded;

/// パスセグメントで符号化する文字（RFC 3986 の pchar 以外）
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'+');

/// API接続先のデフォルト
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// 接続先を上書きする環境変数名
pub const API_BASE_URL_ENV: &str = "ESTATE_API_URL";

/// HTTPメソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// エンドポイント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Properties { agent: Option<String> },
    Property(String),
    AddProperty,
    UpdateProperty(String),
    DeleteProperty(String),
    Agents,
    AgentAuthStatus,
    Banners { kind: Option<BannerKind> },
    CreateBanner,
    UpdateBanner(String),
    DeleteBanner(String),
    Notifications,
    MarkNotificationRead(String),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::AddProperty | Endpoint::CreateBanner => Method::Post,
            Endpoint::UpdateProperty(_) | Endpoint::UpdateBanner(_) => Method::Put,
            Endpoint::DeleteProperty(_) | Endpoint::DeleteBanner(_) => Method::Delete,
            Endpoint::MarkNotificationRead(_) => Method::Patch,
            _ => Method::Get,
        }
    }

    /// パス（クエリ込み）
    pub fn path(&self) -> String {
        match self {
            Endpoint::Properties { agent: None } => "/api/properties".to_string(),
            Endpoint::Properties { agent: Some(agent) } => {
                format!("/api/properties?{}", query_pair("agent", agent))
            }
            Endpoint::Property(id) | Endpoint::UpdateProperty(id) | Endpoint::DeleteProperty(id) => {
                format!("/api/properties/{}", segment(id))
            }
            Endpoint::AddProperty => "/api/properties/add-property".to_string(),
            Endpoint::Agents => "/api/agents".to_string(),
            Endpoint::AgentAuthStatus => "/api/agents/auth-status".to_string(),
            Endpoint::Banners { kind: None } | Endpoint::CreateBanner => "/api/banners".to_string(),
            Endpoint::Banners { kind: Some(kind) } => {
                format!("/api/banners?{}", query_pair("type", kind.as_str()))
            }
            Endpoint::UpdateBanner(id) | Endpoint::DeleteBanner(id) => {
                format!("/api/banners/{}", segment(id))
            }
            Endpoint::Notifications => "/api/notifications".to_string(),
            Endpoint::MarkNotificationRead(id) => format!("/api/notifications/{}/read", segment(id)),
        }
    }
}

fn query_pair(key: &str, value: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}

/// パスセグメントとして安全な形にエンコード
fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// API接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// 接続先を検証して作る（末尾の `/` は取り除く）
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("API base URL is empty".into()));
        }
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| Error::Config(format!("invalid API base URL {}: {}", trimmed, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "API base URL must be http or https: {}",
                trimmed
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// 一覧レスポンス（配列そのまま or `{"data": [...]}`）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Collection<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

/// 一覧レスポンスをパース
pub fn parse_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let collection: Collection<T> = serde_json::from_str(body)?;
    Ok(match collection {
        Collection::Bare(items) => items,
        Collection::Wrapped { data } => data,
    })
}

/// 単体レスポンス（そのまま or `{"data": {...}}`）
pub fn parse_item<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let inner = match value {
        serde_json::Value::Object(mut map) if map.len() == 1 && map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    };
    Ok(serde_json::from_value(inner)?)
}
