use thiserror::Error;

/// 博客错误类型
#[derive(Error, Debug)]
pub enum BlogError {
    #[error("加载博客数据失败: {path}: {message}")]
    LoadFailure {
        path: String,
        message: String,
    },

    #[error("文章不存在: {id}")]
    NotFound {
        id: u64,
    },

    #[error("表单校验失败: {}", messages.join(" "))]
    Validation {
        messages: Vec<String>,
    },

    #[error("模板渲染错误: {0}")]
    Template(#[from] tera::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl BlogError {
    /// 是否为文章不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::NotFound { .. })
    }
}

pub type BlogResult<T> = std::result::Result<T, BlogError>;
