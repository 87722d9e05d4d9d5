use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstateError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("物件が見つかりません: {0}")]
    PropertyNotFound(String),

    #[error("バナーが見つかりません: {0}")]
    BannerNotFound(String),

    #[error("通知が見つかりません: {0}")]
    NotificationNotFound(String),

    #[error("ページ {page} は範囲外です（全 {total_pages} ページ）")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("操作をキャンセルしました")]
    Cancelled,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] estate_common::Error),
}

impl From<reqwest::Error> for EstateError {
    fn from(err: reqwest::Error) -> Self {
        EstateError::Common(estate_common::Error::Transport(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, EstateError>;
