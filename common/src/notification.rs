//! 管理画面の通知
//!
//! 通知種別は `ENTITY_ACTION` 形式のトークン（例: `PROPERTY_CREATED`）。
//! 最初の `_` で分割し、形式が崩れていれば汎用ラベルにする。

use serde::{Deserialize, Serialize};

/// 形式不正時のラベル
pub const GENERIC_LABEL: &str = "Notification";

/// 通知
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub read: bool,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub entity_id: Option<String>,
}

impl Notification {
    pub fn label(&self) -> NotificationLabel {
        NotificationLabel::parse(&self.kind)
    }
}

/// 種別トークンの解釈結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationLabel {
    Known { entity: String, action: String },
    Generic,
}

impl NotificationLabel {
    /// 種別トークンを解釈する（失敗しない）
    pub fn parse(token: &str) -> Self {
        let Some((entity, action)) = token.trim().split_once('_') else {
            return NotificationLabel::Generic;
        };
        if entity.is_empty() || action.is_empty() {
            return NotificationLabel::Generic;
        }
        NotificationLabel::Known {
            entity: title_case(entity),
            action: title_case(action),
        }
    }

    /// 見出し（"Property Created" など）
    pub fn title(&self) -> String {
        match self {
            NotificationLabel::Known { entity, action } => format!("{} {}", entity, action),
            NotificationLabel::Generic => GENERIC_LABEL.to_string(),
        }
    }

    pub fn entity(&self) -> Option<&str> {
        match self {
            NotificationLabel::Known { entity, .. } => Some(entity),
            NotificationLabel::Generic => None,
        }
    }
}

/// "STATUS_CHANGED" → "Status Changed"
fn title_case(word: &str) -> String {
    word.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 未読件数
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// ローカルで既読にする（サーバー更新成功後に呼ぶ）
pub fn mark_read(notifications: &mut [Notification], id: &str) -> bool {
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(n) if !n.read => {
            n.read = true;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_action() {
        let label = NotificationLabel::parse("PROPERTY_CREATED");
        assert_eq!(
            label,
            NotificationLabel::Known {
                entity: "Property".into(),
                action: "Created".into()
            }
        );
        assert_eq!(label.title(), "Property Created");
        assert_eq!(label.entity(), Some("Property"));
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let label = NotificationLabel::parse("AGENT_STATUS_CHANGED");
        assert_eq!(label.title(), "Agent Status Changed");
        assert_eq!(label.entity(), Some("Agent"));
    }

    #[test]
    fn test_parse_malformed_tokens_fall_back() {
        for token in ["", "PROPERTY", "_CREATED", "PROPERTY_", "_", "   "] {
            assert_eq!(NotificationLabel::parse(token), NotificationLabel::Generic, "token {:?}", token);
        }
        assert_eq!(NotificationLabel::Generic.title(), GENERIC_LABEL);
    }

    #[test]
    fn test_parse_non_ascii_does_not_panic() {
        let label = NotificationLabel::parse("物件_作成");
        assert_eq!(label.title(), "物件 作成");
    }

    #[test]
    fn test_notification_deserialize() {
        let json = r#"{"_id": "n1", "type": "BANNER_DELETED", "message": "Banner removed"}"#;
        let n: Notification = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(n.kind, "BANNER_DELETED");
        assert!(!n.read);
        assert_eq!(n.label().title(), "Banner Deleted");
    }

    #[test]
    fn test_unread_and_mark_read() {
        let mut list = vec![
            Notification { id: "a".into(), ..Default::default() },
            Notification { id: "b".into(), read: true, ..Default::default() },
        ];
        assert_eq!(unread_count(&list), 1);
        assert!(mark_read(&mut list, "a"));
        assert!(!mark_read(&mut list, "a"));
        assert!(!mark_read(&mut list, "zzz"));
        assert_eq!(unread_count(&list), 0);
    }
}
