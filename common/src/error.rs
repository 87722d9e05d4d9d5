//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 通信系（Transport / Status）はWebとCLIの両方のクライアントで使う。
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },
}

impl Error {
    /// ユーザー向けの短いメッセージ（トースト表示用）
    pub fn user_message(&self) -> String {
        match self {
            Error::Status { status: 401 | 403, .. } => "You are not authorised to do that.".to_string(),
            Error::Status { status: 404, .. } => "The requested item was not found.".to_string(),
            Error::Status { .. } | Error::Transport(_) => {
                "Could not reach the server. Please try again.".to_string()
            }
            Error::Json(_) => "The server sent an unexpected response.".to_string(),
            Error::Config(msg) | Error::Validation(msg) => msg.clone(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("base URL is empty".to_string());
        assert_eq!(format!("{}", error), "Config error: base URL is empty");
    }

    #[test]
    fn test_validation_message_is_shown_as_is() {
        let error = Error::Validation("Title is required".to_string());
        assert_eq!(format!("{}", error), "Invalid input: Title is required");
        assert_eq!(error.user_message(), "Title is required");
    }

    #[test]
    fn test_error_display_status() {
        let error = Error::Status {
            status: 500,
            endpoint: "/api/properties".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 500 from /api/properties");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_user_message() {
        let unauthorised = Error::Status { status: 401, endpoint: "/api/agents".into() };
        assert!(unauthorised.user_message().contains("not authorised"));

        let missing = Error::Status { status: 404, endpoint: "/api/properties/x".into() };
        assert!(missing.user_message().contains("not found"));

        let offline = Error::Transport("connection refused".into());
        assert!(offline.user_message().contains("try again"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Transport("timeout".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Transport"));
        assert!(debug.contains("timeout"));
    }
}
