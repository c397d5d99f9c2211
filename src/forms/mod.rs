//! 联系表单和订阅表单
//!
//! 没有真实的后端，提交只是在校验通过后等待一段固定时间。

pub mod contact;
pub mod newsletter;

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::core::error::BlogError;

pub use contact::ContactForm;
pub use newsletter::subscribe;

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// 提交后显示给用户的通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }

    /// 将校验错误转换为错误通知，每条消息一行
    pub fn from_error(error: &BlogError) -> Self {
        match error {
            BlogError::Validation { messages } => Self::error(messages.join("\n")),
            other => Self::error(other.to_string()),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// 邮箱格式是否有效
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("farmer@teammo.in"));
        assert!(!is_valid_email("farmer@teammo"));
        assert!(!is_valid_email("far mer@teammo.in"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validation_notification_lists_messages() {
        let error = BlogError::Validation {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        let notification = Notification::from_error(&error);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "first\nsecond");
    }
}
