//! fetchベースのAPIクライアント
//!
//! セッションはバックエンドのCookieに任せるため、すべてのリクエストを
//! `credentials: include` で送る。接続先はビルド時の `ESTATE_API_URL`。

use estate_common::api::{parse_collection, parse_item, ApiConfig};
use estate_common::{
    Agent, AgentAuthStatus, Banner, BannerDraft, BannerKind, Endpoint, Error, Notification,
    PropertyDraft, PropertyRecord, Result,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

/// ビルド時に埋め込まれた接続先（無効な値ならデフォルト）
pub fn api_config() -> ApiConfig {
    option_env!("ESTATE_API_URL")
        .and_then(|url| ApiConfig::new(url).ok())
        .unwrap_or_default()
}

fn js_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// 送信するJSON本文
fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    Ok(serde_json::to_string(body)?)
}

async fn send(endpoint: &Endpoint) -> Result<String> {
    send_with(endpoint, None).await
}

/// リクエスト送信（共通処理）
async fn send_with(endpoint: &Endpoint, body: Option<String>) -> Result<String> {
    let url = api_config().url(endpoint);

    let opts = RequestInit::new();
    opts.set_method(endpoint.method().as_str());
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_error)?;
    if body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status {
            status: resp.status(),
            endpoint: endpoint.path(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

/// 物件一覧（エージェント指定時はそのエージェントの物件のみ）
pub async fn fetch_properties(agent: Option<String>) -> Result<Vec<PropertyRecord>> {
    let body = send(&Endpoint::Properties { agent }).await?;
    parse_collection(&body)
}

pub async fn fetch_property(id: String) -> Result<PropertyRecord> {
    let body = send(&Endpoint::Property(id)).await?;
    parse_item(&body)
}

/// 物件登録（タイトル・区分がなければ送らない）
pub async fn add_property(draft: PropertyDraft) -> Result<()> {
    draft.validate_new()?;
    send_with(&Endpoint::AddProperty, Some(json_body(&draft)?))
        .await
        .map(|_| ())
}

/// 物件更新（入力したフィールドだけ送る）
pub async fn update_property(id: String, draft: PropertyDraft) -> Result<()> {
    draft.validate_update()?;
    send_with(&Endpoint::UpdateProperty(id), Some(json_body(&draft)?))
        .await
        .map(|_| ())
}

pub async fn delete_property(id: String) -> Result<()> {
    send(&Endpoint::DeleteProperty(id)).await.map(|_| ())
}

pub async fn fetch_agents() -> Result<Vec<Agent>> {
    let body = send(&Endpoint::Agents).await?;
    parse_collection(&body)
}

pub async fn fetch_auth_status() -> Result<AgentAuthStatus> {
    let body = send(&Endpoint::AgentAuthStatus).await?;
    parse_item(&body)
}

pub async fn fetch_banners(kind: Option<BannerKind>) -> Result<Vec<Banner>> {
    let body = send(&Endpoint::Banners { kind }).await?;
    parse_collection(&body)
}

pub async fn create_banner(draft: BannerDraft) -> Result<()> {
    draft.validate_new()?;
    send_with(&Endpoint::CreateBanner, Some(json_body(&draft)?))
        .await
        .map(|_| ())
}

pub async fn update_banner(id: String, draft: BannerDraft) -> Result<()> {
    draft.validate_update()?;
    send_with(&Endpoint::UpdateBanner(id), Some(json_body(&draft)?))
        .await
        .map(|_| ())
}

pub async fn delete_banner(id: String) -> Result<()> {
    send(&Endpoint::DeleteBanner(id)).await.map(|_| ())
}

pub async fn fetch_notifications() -> Result<Vec<Notification>> {
    let body = send(&Endpoint::Notifications).await?;
    parse_collection(&body)
}

pub async fn mark_notification_read(id: String) -> Result<()> {
    send(&Endpoint::MarkNotificationRead(id)).await.map(|_| ())
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_keeps_message() {
        let err = js_error(JsValue::from_str("network down"));
        assert!(matches!(err, Error::Transport(ref msg) if msg == "network down"));
    }
}
