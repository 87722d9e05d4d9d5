//! REST APIクライアント（reqwest）
//!
//! 失敗は記録して呼び出し元へ返す。リトライはしない。

use crate::error::{EstateError, Result};
use estate_common::api::{parse_collection, parse_item, ApiConfig, Endpoint, Method};
use estate_common::{
    Agent, AgentAuthStatus, Banner, BannerDraft, BannerKind, Notification, PropertyDraft,
    PropertyRecord,
};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session_cookie: Option<String>,
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, timeout: Duration, session_cookie: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            session_cookie,
        })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// 本文なしで送る
    async fn send(&self, endpoint: &Endpoint) -> Result<String> {
        self.send_with(endpoint, None::<&()>).await
    }

    /// リクエストを送り、成功時はボディ文字列を返す（本文はJSON）
    async fn send_with<B: Serialize + ?Sized>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<String> {
        let url = self.config.url(endpoint);
        let method = endpoint.method();
        debug!(method = method.as_str(), %url, with_body = body.is_some(), "APIリクエスト");

        let mut request = self.http.request(http_method(method), &url);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "通信に失敗");
            EstateError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "APIがエラーを返却");
            return Err(estate_common::Error::Status {
                status: status.as_u16(),
                endpoint: endpoint.path(),
            }
            .into());
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "APIレスポンス受信");
        Ok(body)
    }

    pub async fn properties(&self, agent: Option<&str>) -> Result<Vec<PropertyRecord>> {
        let body = self
            .send(&Endpoint::Properties {
                agent: agent.map(str::to_string),
            })
            .await?;
        Ok(parse_collection(&body)?)
    }

    pub async fn property(&self, id: &str) -> Result<PropertyRecord> {
        match self.send(&Endpoint::Property(id.to_string())).await {
            Ok(body) => Ok(parse_item(&body)?),
            Err(err) if is_not_found(&err) => Err(EstateError::PropertyNotFound(id.to_string())),
            Err(err) => Err(err),
        }
    }

    pub async fn delete_property(&self, id: &str) -> Result<()> {
        match self.send(&Endpoint::DeleteProperty(id.to_string())).await {
            Ok(_) => Ok(()),
            Err(err) if is_not_found(&err) => Err(EstateError::PropertyNotFound(id.to_string())),
            Err(err) => Err(err),
        }
    }

    /// 登録（レスポンスに物件が含まれていれば返す）
    pub async fn add_property(&self, draft: &PropertyDraft) -> Result<Option<PropertyRecord>> {
        draft.validate_new()?;
        let body = self.send_with(&Endpoint::AddProperty, Some(draft)).await?;
        Ok(parse_item(&body).ok())
    }

    pub async fn update_property(&self, id: &str, draft: &PropertyDraft) -> Result<Option<PropertyRecord>> {
        draft.validate_update()?;
        match self.send_with(&Endpoint::UpdateProperty(id.to_string()), Some(draft)).await {
            Ok(body) => Ok(parse_item(&body).ok()),
            Err(err) if is_not_found(&err) => Err(EstateError::PropertyNotFound(id.to_string())),
            Err(err) => Err(err),
        }
    }

    pub async fn agents(&self) -> Result<Vec<Agent>> {
        let body = self.send(&Endpoint::Agents).await?;
        Ok(parse_collection(&body)?)
    }

    pub async fn auth_status(&self) -> Result<AgentAuthStatus> {
        let body = self.send(&Endpoint::AgentAuthStatus).await?;
        Ok(parse_item(&body)?)
    }

    pub async fn banners(&self, kind: Option<BannerKind>) -> Result<Vec<Banner>> {
        let body = self.send(&Endpoint::Banners { kind }).await?;
        Ok(parse_collection(&body)?)
    }

    pub async fn create_banner(&self, draft: &BannerDraft) -> Result<Option<Banner>> {
        draft.validate_new()?;
        let body = self.send_with(&Endpoint::CreateBanner, Some(draft)).await?;
        Ok(parse_item(&body).ok())
    }

    pub async fn update_banner(&self, id: &str, draft: &BannerDraft) -> Result<Option<Banner>> {
        draft.validate_update()?;
        match self.send_with(&Endpoint::UpdateBanner(id.to_string()), Some(draft)).await {
            Ok(body) => Ok(parse_item(&body).ok()),
            Err(err) if is_not_found(&err) => Err(EstateError::BannerNotFound(id.to_string())),
            Err(err) => Err(err),
        }
    }

    pub async fn delete_banner(&self, id: &str) -> Result<()> {
        match self.send(&Endpoint::DeleteBanner(id.to_string())).await {
            Ok(_) => Ok(()),
            Err(err) if is_not_found(&err) => Err(EstateError::BannerNotFound(id.to_string())),
            Err(err) => Err(err),
        }
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        let body = self.send(&Endpoint::Notifications).await?;
        Ok(parse_collection(&body)?)
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<()> {
        match self.send(&Endpoint::MarkNotificationRead(id.to_string())).await {
            Ok(_) => Ok(()),
            Err(err) if is_not_found(&err) => Err(EstateError::NotificationNotFound(id.to_string())),
            Err(err) => Err(err),
        }
    }
}

fn is_not_found(err: &EstateError) -> bool {
    matches!(
        err,
        EstateError::Common(estate_common::Error::Status { status: 404, .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_mapping() {
        assert_eq!(http_method(Method::Get), reqwest::Method::GET);
        assert_eq!(http_method(Method::Patch), reqwest::Method::PATCH);
        assert_eq!(http_method(Method::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_is_not_found() {
        let not_found: EstateError = estate_common::Error::Status {
            status: 404,
            endpoint: "/api/properties/x".into(),
        }
        .into();
        assert!(is_not_found(&not_found));

        let server: EstateError = estate_common::Error::Status {
            status: 500,
            endpoint: "/api/properties/x".into(),
        }
        .into();
        assert!(!is_not_found(&server));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // 予約済みポート0には接続できない
        let config = ApiConfig::new("http://127.0.0.1:0").expect("設定作成失敗");
        let client = ApiClient::new(config, Duration::from_secs(2), None).expect("クライアント作成失敗");
        let err = client.agents().await.unwrap_err();
        assert!(matches!(
            err,
            EstateError::Common(estate_common::Error::Transport(_))
        ));
    }

    /// 入力不足の登録は送信前に弾く（接続できない先でも検証エラーになる）
    #[tokio::test]
    async fn test_invalid_drafts_fail_before_sending() {
        let config = ApiConfig::new("http://127.0.0.1:0").expect("設定作成失敗");
        let client = ApiClient::new(config, Duration::from_secs(2), None).expect("クライアント作成失敗");

        let err = client.add_property(&PropertyDraft::default()).await.unwrap_err();
        assert!(matches!(err, EstateError::Common(estate_common::Error::Validation(_))));

        let err = client.update_banner("b1", &BannerDraft::default()).await.unwrap_err();
        assert!(matches!(err, EstateError::Common(estate_common::Error::Validation(_))));
    }

    /// 正しい登録内容は送信まで進む
    #[tokio::test]
    async fn test_valid_draft_reaches_transport() {
        let config = ApiConfig::new("http://127.0.0.1:0").expect("設定作成失敗");
        let client = ApiClient::new(config, Duration::from_secs(2), None).expect("クライアント作成失敗");
        let draft = BannerDraft {
            image: Some("https://cdn.example.com/b.jpg".into()),
            kind: Some(BannerKind::Home),
            ..Default::default()
        };

        let err = client.create_banner(&draft).await.unwrap_err();
        assert!(matches!(err, EstateError::Common(estate_common::Error::Transport(_))));
    }
}
