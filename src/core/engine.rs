use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as AnyhowContext, Result};
use colored::Colorize;
use tracing::info;

use crate::core::debounce::Debouncer;
use crate::core::error::BlogResult;
use crate::core::generator::HtmlGenerator;
use crate::core::listing::Listing;
use crate::core::loader::{load_blog_data, LoadOutcome};
use crate::core::server::Server;
use crate::forms::{self, ContactForm, Notification};
use crate::models::config::Config;

/// 博客引擎
///
/// 负责读取站点配置和数据文件，并驱动列表、页面生成和预览服务器。
#[derive(Debug, Clone)]
pub struct Engine {
    /// 站点目录
    pub base_dir: PathBuf,
    /// 数据文件
    pub data_path: PathBuf,
    /// 公共目录（输出）
    pub public_dir: PathBuf,
    /// 站点配置
    pub config: Config,
}

impl Engine {
    /// 创建一个新的引擎实例
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        info!("工作目录: {}", base_dir.display());

        let config = Config::load(&base_dir)
            .with_context(|| format!("加载站点配置失败: {}", base_dir.display()))?;

        Ok(Self::with_config(base_dir, config))
    }

    /// 使用指定配置创建引擎
    pub fn with_config(base_dir: PathBuf, config: Config) -> Self {
        Self {
            data_path: config.data_path(&base_dir),
            public_dir: config.public_path(&base_dir),
            base_dir,
            config,
        }
    }

    /// 加载博客数据，失败时返回空数据（失败原因由加载器记录）
    pub async fn load(&self) -> LoadOutcome {
        load_blog_data(&self.data_path).await
    }

    /// 加载数据并创建列表引擎
    pub async fn listing(&self) -> Listing {
        Listing::from_outcome(self.load().await)
    }

    /// 搜索输入使用的防抖器
    pub fn search_debouncer(&self) -> Debouncer {
        Debouncer::from_millis(self.config.search_debounce_ms)
    }

    /// 生成静态文件，返回写入的页面数
    pub async fn generate(&self) -> Result<usize> {
        let data = self.load().await.into_data();
        let generator = HtmlGenerator::new(self.public_dir.clone(), self.config.clone())?;
        let pages = generator
            .generate(&data)
            .with_context(|| format!("生成页面失败: {}", self.public_dir.display()))?;
        info!("{}", "Generation complete.".green());
        Ok(pages)
    }

    /// 生成后启动预览服务器
    pub async fn server(&self, port: u16) -> Result<()> {
        self.generate().await?;
        let generator = HtmlGenerator::new(self.public_dir.clone(), self.config.clone())?;
        let not_found = generator.blog_dir().join("404.html");
        Server::new(self.public_dir.clone(), not_found, port).start().await
    }

    /// 清理生成的文件
    pub fn clean(&self) -> Result<()> {
        HtmlGenerator::new(self.public_dir.clone(), self.config.clone())?.clean()?;
        Ok(())
    }

    /// 提交联系表单
    pub async fn contact(&self, form: &ContactForm) -> BlogResult<Notification> {
        form.submit(Duration::from_millis(self.config.contact_delay_ms)).await
    }

    /// 订阅邮件简报
    pub async fn subscribe(&self, email: &str) -> BlogResult<Notification> {
        forms::subscribe(email, Duration::from_millis(self.config.newsletter_delay_ms)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_data_file_gives_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::new(dir.path().to_path_buf()).unwrap();
        let listing = engine.listing().await;
        let view = listing.view();
        assert!(view.is_empty());
        assert!(view.featured.is_none());
    }

    #[tokio::test]
    async fn test_load_passes_loader_outcome_through() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::new(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(engine.data_path.parent().unwrap()).unwrap();
        std::fs::write(&engine.data_path, "{ broken").unwrap();

        let outcome = engine.load().await;
        assert!(outcome.is_fallback());
        assert!(matches!(outcome.error(), Some(crate::core::BlogError::LoadFailure { .. })));
    }

    #[tokio::test]
    async fn test_config_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(Config::FILE_NAME),
            "data_file: content/posts.json\npublic_dir: site\nsearch_debounce_ms: 120\n",
        )
        .unwrap();

        let engine = Engine::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(engine.data_path, dir.path().join("content/posts.json"));
        assert_eq!(engine.public_dir, dir.path().join("site"));
        assert_eq!(engine.search_debouncer().delay(), Duration::from_millis(120));
    }
}
