use serde_json::{json, Value};

use crate::models::{Config, Post};

/// 文章的 schema.org `BlogPosting` 结构化数据
pub fn blog_posting(post: &Post, config: &Config) -> Value {
    let date = post.iso_date();

    let mut publisher = json!({
        "@type": "Organization",
        "name": config.title,
    });
    if let Some(logo) = config.logo.as_deref().filter(|l| !l.is_empty()) {
        publisher["logo"] = json!({
            "@type": "ImageObject",
            "url": logo,
        });
    }

    let mut posting = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.meta_description(),
        "image": post.image,
        "publisher": publisher,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": config.post_url(post.id),
        },
    });
    // 日期未知时不输出日期字段
    if let Some(date) = post.iso_date() {
        posting["datePublished"] = json!(date);
        posting["dateModified"] = json!(date);
    }
    posting
}

/// 面包屑导航：首页 → 博客 → 当前文章
pub fn breadcrumbs(post: &Post, config: &Config) -> Value {
    let items = [
        ("Home", config.site_url()),
        ("Blog", config.blog_url()),
        (post.title.as_str(), config.post_url(post.id)),
    ];

    let list: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": list,
    })
}

/// 包装为 `<script type="application/ld+json">` 标签
pub fn to_script_tag(value: &Value) -> String {
    // 防止内容中的 "</script>" 提前结束标签
    let body = value.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{}</script>", body)
}
