use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::core::error::{BlogError, BlogResult};
use crate::models::Post;

fn post_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/(\d+)\.html").expect("valid post path regex"))
}

/// 从页面路径中解析文章ID，例如 `/blogs/12.html` -> `12`
pub fn post_id_from_path(path: &str) -> Option<u64> {
    post_path_pattern()
        .captures(path)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// 从完整URL中解析文章ID
pub fn post_id_from_url(url: &str) -> Option<u64> {
    Url::parse(url).ok().and_then(|u| post_id_from_path(u.path()))
}

/// 从路径或URL中解析文章ID
pub fn post_id_from_location(location: &str) -> Option<u64> {
    post_id_from_url(location).or_else(|| post_id_from_path(location))
}

/// 按ID查找文章
pub fn find_post(posts: &[Post], id: u64) -> BlogResult<&Post> {
    posts
        .iter()
        .find(|post| post.id == id)
        .ok_or(BlogError::NotFound { id })
}

/// 解析页面地址对应的文章
///
/// 地址中没有文章ID时返回 `Ok(None)`（列表页），有ID但找不到文章时返回 `NotFound`。
pub fn resolve_post<'a>(posts: &'a [Post], location: &str) -> BlogResult<Option<&'a Post>> {
    match post_id_from_location(location) {
        Some(id) => find_post(posts, id).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_from_path() {
        assert_eq!(post_id_from_path("/blogs/12.html"), Some(12));
        assert_eq!(post_id_from_path("/blogs/"), None);
        assert_eq!(post_id_from_path("/blogs/index.html"), None);
        assert_eq!(post_id_from_path("12.html"), None);
    }

    #[test]
    fn test_post_id_from_url() {
        assert_eq!(post_id_from_url("https://agritech.teammo.in/blogs/7.html?ref=home"), Some(7));
        assert_eq!(post_id_from_url("/blogs/7.html"), None);
        assert_eq!(post_id_from_location("/blogs/7.html"), Some(7));
    }

    #[test]
    fn test_resolve_listing_path() {
        assert!(matches!(resolve_post(&[], "/blogs/index.html"), Ok(None)));
        assert!(resolve_post(&[], "/blogs/3.html").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_post_not_found() {
        let err = find_post(&[], 42).unwrap_err();
        assert!(err.is_not_found());
    }
}
