use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use crate::utils::{ensure_leading_slash, ensure_trailing_slash};

/// 站点配置（`_config.yml`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 站点名称（用于结构化数据中的发布者）
    pub title: String,
    /// 文章页标题后缀
    pub blog_title_suffix: String,
    /// 网站URL
    pub url: String,
    /// 网站根目录
    pub root: String,
    /// 博客所在目录
    pub blog_dir: String,
    /// 发布者 Logo
    pub logo: Option<String>,
    /// 博客数据文件（相对于站点目录）
    pub data_file: String,
    /// 输出目录
    pub public_dir: String,
    /// 搜索输入防抖时间（毫秒）
    pub search_debounce_ms: u64,
    /// 模拟订阅耗时（毫秒）
    pub newsletter_delay_ms: u64,
    /// 模拟联系表单发送耗时（毫秒）
    pub contact_delay_ms: u64,
    /// 图片缺少描述时的默认 alt 文本
    pub default_image_alt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Teammo Agritech Solutions".to_string(),
            blog_title_suffix: "Teammo Agritech Solutions Blog".to_string(),
            url: "https://agritech.teammo.in".to_string(),
            root: "/".to_string(),
            blog_dir: "blogs".to_string(),
            logo: Some("https://agritech.teammo.in/assets/leaf.ico".to_string()),
            data_file: "data/blogs.json".to_string(),
            public_dir: "public".to_string(),
            search_debounce_ms: 300,
            newsletter_delay_ms: 1500,
            contact_delay_ms: 2000,
            default_image_alt: "Agricultural technology image".to_string(),
        }
    }
}

impl Config {
    /// 配置文件名
    pub const FILE_NAME: &'static str = "_config.yml";

    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// 加载站点目录下的配置，文件不存在时使用默认配置
    pub fn load(site_dir: &Path) -> Result<Self> {
        let path = site_dir.join(Self::FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// 站点根URL，例如 `https://agritech.teammo.in/`
    pub fn site_url(&self) -> String {
        let root = ensure_trailing_slash(&ensure_leading_slash(&self.root));
        format!("{}{}", self.url.trim_end_matches('/'), root)
    }

    /// 博客目录URL，例如 `https://agritech.teammo.in/blogs/`
    pub fn blog_url(&self) -> String {
        let blog_dir = ensure_trailing_slash(self.blog_dir.trim_matches('/'));
        format!("{}{}", self.site_url(), blog_dir)
    }

    /// 文章页面的完整URL
    pub fn post_url(&self, post_id: u64) -> String {
        format!("{}{}.html", self.blog_url(), post_id)
    }

    /// 数据文件的绝对路径
    pub fn data_path(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.data_file)
    }

    /// 输出目录的绝对路径
    pub fn public_path(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.public_dir)
    }
}
