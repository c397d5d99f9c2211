use std::collections::HashMap;

use chrono::{Datelike, Utc};
use serde::Serialize;
use tera::{Context as TeraContext, Tera};
use tracing::{debug, error};

use crate::core::error::BlogResult;
use crate::core::listing::{listing_file_name, load_more, CategoryFilter, Listing};
use crate::models::{category_label, parse_post_date, Category, Config, Post};
use crate::utils::{format_date, markdown};

// 嵌入的主题模板
mod templates {
    pub const LAYOUT_HTML: &str = include_str!("../../embed/theme/layout/layout.html");
    pub const INDEX_HTML: &str = include_str!("../../embed/theme/layout/index.html");
    pub const POST_HTML: &str = include_str!("../../embed/theme/layout/post.html");
    pub const NOT_FOUND_HTML: &str = include_str!("../../embed/theme/layout/404.html");
}

/// 文章卡片的模板数据
#[derive(Debug, Clone, Serialize)]
pub struct ArticleCard {
    pub id: u64,
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub image_alt: String,
    /// ISO 日期，模板中经 `date_format` 过滤器显示
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub category_label: String,
}

impl ArticleCard {
    pub fn new(post: &Post, categories: &[Category], config: &Config) -> Self {
        let image_alt = if post.title.trim().is_empty() {
            config.default_image_alt.clone()
        } else {
            post.title.clone()
        };

        Self {
            id: post.id,
            url: post.file_name(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            image: post.image.clone(),
            image_alt,
            date: post.iso_date().unwrap_or_default(),
            read_time: post.read_time.clone(),
            category: post.category.clone(),
            category_label: category_label(categories, &post.category).to_string(),
        }
    }
}

/// 筛选按钮的模板数据
#[derive(Debug, Clone, Serialize)]
struct FilterButton<'a> {
    name: &'a str,
    /// 该分类第一页的列表页
    url: String,
    active: bool,
}

/// 站点信息的模板数据
#[derive(Debug, Clone, Serialize)]
struct SiteContext {
    title: String,
    root: String,
    blog_url: String,
}

/// 主题渲染器
#[derive(Clone)]
pub struct ThemeRenderer {
    /// 模板引擎
    tera: Tera,
    /// 站点配置
    config: Config,
}

impl ThemeRenderer {
    /// 创建新的主题渲染器，加载内置模板
    pub fn new(config: Config) -> BlogResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", templates::LAYOUT_HTML),
            ("index.html", templates::INDEX_HTML),
            ("post.html", templates::POST_HTML),
            ("404.html", templates::NOT_FOUND_HTML),
        ])?;

        Self::register_filters(&mut tera);

        Ok(Self { tera, config })
    }

    /// 注册模板过滤器
    fn register_filters(tera: &mut Tera) {
        tera.register_filter("date_format", Self::date_format_filter);
        tera.register_filter("markdown", Self::markdown_filter);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn base_context(&self) -> TeraContext {
        let mut context = TeraContext::new();
        context.insert(
            "site",
            &SiteContext {
                title: self.config.title.clone(),
                root: self.config.site_url(),
                blog_url: self.config.blog_url(),
            },
        );
        context.insert("year", &Utc::now().year());
        context
    }

    fn render(&self, template: &str, context: &TeraContext) -> BlogResult<String> {
        debug!("Rendering template {}", template);
        self.tera.render(template, context).map_err(|e| {
            error!("模板渲染失败: {}", e);
            e.into()
        })
    }

    /// 渲染博客列表页面（当前筛选、搜索和分页状态）
    pub fn render_listing(&self, listing: &Listing) -> BlogResult<String> {
        let view = listing.view();
        let categories = listing.categories();
        let state = listing.state();

        let mut buttons = vec![FilterButton {
            name: "All",
            url: listing_file_name(&CategoryFilter::All, 1),
            active: state.current_filter == CategoryFilter::All,
        }];
        buttons.extend(categories.iter().map(|c| {
            let filter = CategoryFilter::parse(&c.id);
            FilterButton {
                name: &c.name,
                url: listing_file_name(&filter, 1),
                active: state.current_filter == filter,
            }
        }));

        // "加载更多" 指向下一页的静态列表页
        let load_more_url = view.has_more.then(|| load_more(state).page_file_name());

        let featured = view
            .featured
            .map(|post| ArticleCard::new(post, categories, &self.config));
        let cards: Vec<ArticleCard> = view
            .visible
            .iter()
            .map(|post| ArticleCard::new(post, categories, &self.config))
            .collect();

        let mut context = self.base_context();
        context.insert("categories", &buttons);
        context.insert("featured", &featured);
        context.insert("cards", &cards);
        context.insert("total", &view.total);
        context.insert("load_more_label", &view.load_more_label());
        context.insert("load_more_url", &load_more_url);

        self.render("index.html", &context)
    }

    /// 渲染单篇文章页面
    pub fn render_post(&self, post: &Post, categories: &[Category]) -> BlogResult<String> {
        let mut context = self.base_context();
        context.insert("post", &ArticleCard::new(post, categories, &self.config));
        context.insert("content", &post.content);
        context.insert("tags", &post.tags);
        context.insert("seo_head", &crate::seo::post_head(post, &self.config));

        self.render("post.html", &context)
    }

    /// 渲染文章不存在页面
    pub fn render_not_found(&self) -> BlogResult<String> {
        self.render("404.html", &self.base_context())
    }

    fn date_format_filter(
        value: &tera::Value,
        _args: &HashMap<String, tera::Value>,
    ) -> tera::Result<tera::Value> {
        match value.as_str().and_then(parse_post_date) {
            Some(date) => Ok(tera::Value::String(format_date(&date))),
            None => Ok(value.clone()),
        }
    }

    fn markdown_filter(
        value: &tera::Value,
        _args: &HashMap<String, tera::Value>,
    ) -> tera::Result<tera::Value> {
        match value.as_str() {
            Some(text) => Ok(tera::Value::String(markdown::render(text))),
            None => Ok(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlogData, Settings};
    use chrono::NaiveDate;

    fn post(id: u64, category: &str, featured: bool) -> Post {
        Post {
            id,
            title: format!("Post {}", id),
            excerpt: format!("Excerpt {}", id),
            content: "## Heading\n\nBody with **bold** text.".to_string(),
            category: category.to_string(),
            tags: vec!["Soil".to_string()],
            date: NaiveDate::from_ymd_opt(2024, 1, 5),
            image: String::new(),
            read_time: "5 min read".to_string(),
            featured,
            seo_title: None,
            seo_description: None,
        }
    }

    fn listing(posts: Vec<Post>) -> Listing {
        Listing::new(BlogData {
            posts,
            categories: vec![Category { id: "soil".to_string(), name: "Soil Health".to_string() }],
            settings: Settings { posts_per_page: Some(2) },
        })
    }

    #[test]
    fn test_render_listing_with_load_more() {
        let renderer = ThemeRenderer::new(Config::default()).unwrap();
        let listing = listing(vec![
            post(1, "soil", false),
            post(2, "soil", true),
            post(3, "crops", false),
        ]);

        let html = renderer.render_listing(&listing).unwrap();
        assert!(html.contains("Soil Health"));
        assert!(html.contains("January 5, 2024"));
        assert!(html.contains("Load More Articles (1 remaining)"));
        assert!(html.contains(
            r#"<a id="load-more-btn" class="btn btn-primary" href="page-2.html">"#
        ));
        assert!(html.contains(r#"<a class="filter-btn active" href="index.html">All</a>"#));
        assert!(html.contains(
            r#"<a class="filter-btn" href="category-soil.html">Soil Health</a>"#
        ));
        assert!(html.contains(r#"<span id="total-articles">3</span>"#));
        // 第三篇在下一页
        assert!(!html.contains("Post 3"));
    }

    #[test]
    fn test_render_filtered_second_page() {
        let renderer = ThemeRenderer::new(Config::default()).unwrap();
        let mut listing = listing(vec![
            post(1, "soil", false),
            post(2, "soil", true),
            post(3, "soil", false),
            post(4, "crops", false),
        ]);
        listing.filter_by_category("soil");
        listing.load_more();

        let html = renderer.render_listing(&listing).unwrap();
        assert!(html.contains(r#"<a class="filter-btn active" href="category-soil.html">"#));
        assert!(html.contains("Post 3"));
        assert!(!html.contains("Post 4"));
        assert!(!html.contains("load-more-btn"));
    }

    #[test]
    fn test_render_empty_listing() {
        let renderer = ThemeRenderer::new(Config::default()).unwrap();
        let html = renderer.render_listing(&listing(Vec::new())).unwrap();
        assert!(html.contains("No articles found"));
        assert!(html.contains("No featured article available."));
        assert!(!html.contains("load-more-btn"));
    }

    #[test]
    fn test_render_post_page() {
        let renderer = ThemeRenderer::new(Config::default()).unwrap();
        let html = renderer.render_post(&post(2, "crops", false), &[]).unwrap();
        assert!(html.contains("<title>Post 2 - Teammo Agritech Solutions Blog</title>"));
        assert!(html.contains("<h2>Heading</h2>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains(r#"<span class="article-badge">crops</span>"#));
    }

    #[test]
    fn test_render_not_found() {
        let renderer = ThemeRenderer::new(Config::default()).unwrap();
        let html = renderer.render_not_found().unwrap();
        assert!(html.contains("404 - Blog Post Not Found"));
    }
}
