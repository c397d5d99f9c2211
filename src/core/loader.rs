use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::error::{BlogError, BlogResult};
use crate::models::BlogData;

/// 数据加载结果
///
/// 加载失败时不向上传播错误，而是返回空数据并附带失败原因，
/// 页面据此显示空状态。不做重试。
#[derive(Debug)]
pub enum LoadOutcome {
    /// 加载成功
    Loaded(BlogData),
    /// 加载失败，使用空数据
    Fallback {
        data: BlogData,
        error: BlogError,
    },
}

impl LoadOutcome {
    /// 从 JSON 文本构建加载结果
    pub fn from_json(content: &str, source: &str) -> Self {
        match parse_blog_data(content, source) {
            Ok(mut data) => {
                data.sort_newest_first();
                info!(
                    "Loaded {} posts and {} categories from {}",
                    data.posts.len(),
                    data.categories.len(),
                    source
                );
                LoadOutcome::Loaded(data)
            }
            Err(error) => Self::fallback(error),
        }
    }

    fn fallback(error: BlogError) -> Self {
        warn!("博客数据加载失败，使用空数据: {}", error);
        LoadOutcome::Fallback {
            data: BlogData::default(),
            error,
        }
    }

    /// 当前可用的数据
    pub fn data(&self) -> &BlogData {
        match self {
            LoadOutcome::Loaded(data) => data,
            LoadOutcome::Fallback { data, .. } => data,
        }
    }

    /// 取出数据
    pub fn into_data(self) -> BlogData {
        match self {
            LoadOutcome::Loaded(data) => data,
            LoadOutcome::Fallback { data, .. } => data,
        }
    }

    /// 是否使用了空数据兜底
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback { .. })
    }

    /// 加载失败的原因
    pub fn error(&self) -> Option<&BlogError> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Fallback { error, .. } => Some(error),
        }
    }
}

/// 解析博客数据
pub fn parse_blog_data(content: &str, source: &str) -> BlogResult<BlogData> {
    serde_json::from_str(content).map_err(|e| BlogError::LoadFailure {
        path: source.to_string(),
        message: e.to_string(),
    })
}

/// 读取并解析博客数据文件，文章按发布日期倒序排列
pub async fn load_blog_data(path: &Path) -> LoadOutcome {
    debug!("Loading blog data from {}", path.display());
    let source = path.display().to_string();

    match tokio::fs::read_to_string(path).await {
        Ok(content) => LoadOutcome::from_json(&content, &source),
        Err(e) => LoadOutcome::fallback(BlogError::LoadFailure {
            path: source,
            message: e.to_string(),
        }),
    }
}
