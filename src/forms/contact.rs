use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::error::{BlogError, BlogResult};
use crate::forms::{is_valid_email, Notification};

/// 联系表单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// 校验必填字段和邮箱格式，返回全部错误消息
    pub fn validate(&self) -> BlogResult<()> {
        let mut messages = Vec::new();

        for (field, value) in [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Service", &self.service),
            ("Message", &self.message),
        ] {
            if value.trim().is_empty() {
                messages.push(format!("Please fill in the {} field.", field));
            }
        }

        if !self.email.is_empty() && !is_valid_email(&self.email) {
            messages.push("Please enter a valid email address.".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(BlogError::Validation { messages })
        }
    }

    /// 校验并模拟发送
    pub async fn submit(&self, delay: Duration) -> BlogResult<Notification> {
        self.validate()?;

        info!("Sending contact request from {}", self.email);
        tokio::time::sleep(delay).await;

        Ok(Notification::success(
            "Thank you for your message! We'll get back to you within 24 hours.",
        ))
    }
}
