pub mod meta;
pub mod schema;

pub use meta::PostMeta;

use crate::models::{Config, Post};

/// 文章页面 `<head>` 中需要注入的全部 SEO 内容
pub fn post_head(post: &Post, config: &Config) -> String {
    let meta = PostMeta::for_post(post, config);
    format!(
        "{}\n{}\n{}",
        meta.to_html(),
        schema::to_script_tag(&schema::blog_posting(post, config)),
        schema::to_script_tag(&schema::breadcrumbs(post, config)),
    )
}
