use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// 未配置 `postsPerPage` 时的每页文章数
pub const DEFAULT_POSTS_PER_PAGE: usize = 6;

/// 博客文章
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 文章ID（对应 `<id>.html`）
    pub id: u64,
    /// 文章标题
    pub title: String,
    /// 文章摘要
    #[serde(default)]
    pub excerpt: String,
    /// 文章全文
    #[serde(default)]
    pub content: String,
    /// 分类ID
    #[serde(default)]
    pub category: String,
    /// 文章标签
    #[serde(default)]
    pub tags: Vec<String>,
    /// 发布日期，无法识别时为 `None`（排在最后）
    #[serde(default, deserialize_with = "deserialize_post_date")]
    pub date: Option<NaiveDate>,
    /// 封面图片
    #[serde(default)]
    pub image: String,
    /// 阅读时间标签，例如 "5 min read"
    #[serde(default)]
    pub read_time: String,
    /// 是否为推荐文章
    #[serde(default)]
    pub featured: bool,
    /// SEO 标题覆盖
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    /// SEO 描述覆盖
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl Post {
    /// 页面使用的标题（优先 SEO 标题）
    pub fn meta_title(&self) -> &str {
        non_empty(self.seo_title.as_deref()).unwrap_or(&self.title)
    }

    /// 页面使用的描述（优先 SEO 描述）
    pub fn meta_description(&self) -> &str {
        non_empty(self.seo_description.as_deref()).unwrap_or(&self.excerpt)
    }

    /// 文章页面文件名
    pub fn file_name(&self) -> String {
        format!("{}.html", self.id)
    }

    /// ISO 格式的发布日期
    pub fn iso_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// 页面显示的发布日期，日期未知时为空
    pub fn display_date(&self) -> String {
        self.date.as_ref().map(crate::utils::format_date).unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// 分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// 分类ID
    pub id: String,
    /// 显示名称
    pub name: String,
}

/// 数据文件中的设置项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// 每页文章数
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_per_page: Option<usize>,
}

impl Settings {
    /// 实际生效的每页文章数，0 与缺省等同
    pub fn posts_per_page(&self) -> usize {
        match self.posts_per_page {
            Some(n) if n > 0 => n,
            _ => DEFAULT_POSTS_PER_PAGE,
        }
    }
}

/// 博客数据文件 `blogs.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogData {
    /// 所有文章
    #[serde(default, rename = "blogs")]
    pub posts: Vec<Post>,
    /// 所有分类
    #[serde(default)]
    pub categories: Vec<Category>,
    /// 设置
    #[serde(default)]
    pub settings: Settings,
}

impl BlogData {
    /// 数据是否为空
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.categories.is_empty() && self.settings == Settings::default()
    }

    /// 按发布日期倒序排列文章（稳定排序）
    ///
    /// `None < Some(_)`，所以日期未知的文章排在最后。
    pub fn sort_newest_first(&mut self) {
        self.posts.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// 根据分类ID查找显示名称，找不到时返回ID本身
    pub fn category_label<'a>(&'a self, category_id: &'a str) -> &'a str {
        category_label(&self.categories, category_id)
    }
}

/// 根据分类ID查找显示名称，找不到时返回ID本身
pub fn category_label<'a>(categories: &'a [Category], category_id: &'a str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.name.as_str())
        .unwrap_or(category_id)
}

/// 支持的纯日期格式
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y", "%m/%d/%Y"];

/// 支持的日期时间格式（无时区）
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// 解析文章日期
///
/// 依次尝试 `YYYY-MM-DD`、RFC 3339、RFC 2822 和几种常见的英文日期写法。
pub fn parse_post_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| DateTime::parse_from_rfc2822(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

// 无法识别的日期只影响该篇文章，不让整个数据文件解析失败
fn deserialize_post_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| {
        let date = parse_post_date(&raw);
        if date.is_none() {
            warn!("无法识别的文章日期，排在最后: {:?}", raw);
        }
        date
    }))
}
