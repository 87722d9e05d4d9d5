use crate::error::{EstateError, Result};
use estate_common::api::{ApiConfig, API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use estate_common::pagination::{AGENTS_PER_PAGE, PUBLIC_LISTING_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub listing_page_size: usize,
    pub agents_per_page: usize,
    /// 管理操作用のセッションCookie（`name=value`）
    pub session_cookie: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout_seconds: 30,
            listing_page_size: PUBLIC_LISTING_PAGE_SIZE,
            agents_per_page: AGENTS_PER_PAGE,
            session_cookie: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EstateError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("estate-market").join("config.json"))
    }

    /// 接続先を決める（フラグ > 環境変数 > 設定ファイル）
    pub fn api_config(&self, flag: Option<&str>) -> Result<ApiConfig> {
        let env = std::env::var(API_BASE_URL_ENV).ok();
        let base_url = resolve_base_url(flag, env.as_deref(), &self.api_base_url);
        Ok(ApiConfig::new(base_url)?)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        // 保存前に検証
        ApiConfig::new(&url)?;
        self.api_base_url = url;
        self.save()
    }
}

/// 空文字は未指定として扱う
pub fn resolve_base_url<'a>(flag: Option<&'a str>, env: Option<&'a str>, file: &'a str) -> &'a str {
    [flag, env]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(file)
}
