use serde::Serialize;

use crate::models::{Config, Post};
use crate::utils::html_escape;

/// 文章页面的 SEO 元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    /// `<title>` 内容
    pub page_title: String,
    /// meta description
    pub description: String,
    /// Open Graph / Twitter 标题
    pub social_title: String,
    /// 分享图片
    pub image: String,
    /// 规范链接
    pub canonical: String,
}

impl PostMeta {
    /// 为文章构建元数据，SEO 覆盖字段优先
    pub fn for_post(post: &Post, config: &Config) -> Self {
        Self {
            page_title: format!("{} - {}", post.title, config.blog_title_suffix),
            description: post.meta_description().to_string(),
            social_title: post.meta_title().to_string(),
            image: post.image.clone(),
            canonical: config.post_url(post.id),
        }
    }

    /// 生成 `<head>` 中的标签
    pub fn to_html(&self) -> String {
        let title = html_escape(&self.social_title);
        let description = html_escape(&self.description);
        let image = html_escape(&self.image);

        let mut out = format!(
            r#"<title>{}</title>
<meta name="description" content="{}">
<link rel="canonical" href="{}">
<meta property="og:type" content="article">
<meta property="og:url" content="{}">"#,
            html_escape(&self.page_title),
            description,
            html_escape(&self.canonical),
            html_escape(&self.canonical),
        );

        for (property, content) in [
            ("og:title", &title),
            ("og:description", &description),
            ("og:image", &image),
        ] {
            out.push_str(&format!("\n<meta property=\"{}\" content=\"{}\">", property, content));
        }

        out.push_str("\n<meta name=\"twitter:card\" content=\"summary_large_image\">");
        for (name, content) in [
            ("twitter:title", &title),
            ("twitter:description", &description),
            ("twitter:image", &image),
        ] {
            out.push_str(&format!("\n<meta name=\"{}\" content=\"{}\">", name, content));
        }

        out
    }
}
