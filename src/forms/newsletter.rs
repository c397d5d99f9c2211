use std::time::Duration;

use tracing::info;

use crate::core::error::{BlogError, BlogResult};
use crate::forms::{is_valid_email, Notification};

/// 模拟订阅邮件简报
pub async fn subscribe(email: &str, delay: Duration) -> BlogResult<Notification> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(BlogError::Validation {
            messages: vec!["Please enter a valid email address.".to_string()],
        });
    }

    info!("Subscribing {} to the newsletter", email);
    tokio::time::sleep(delay).await;

    Ok(Notification::success("Thank you for subscribing to our newsletter!"))
}
