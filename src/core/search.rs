use crate::models::Post;

/// 规范化搜索词：转为小写，空字符串表示不搜索
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// 判断文章是否匹配搜索词
///
/// `term` 必须已经是小写。标题、摘要、正文或任一标签包含该词即视为匹配。
pub fn post_matches(post: &Post, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    contains(&post.title, term)
        || contains(&post.excerpt, term)
        || contains(&post.content, term)
        || post.tags.iter().any(|tag| contains(tag, term))
}

fn contains(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(title: &str, tags: &[&str]) -> Post {
        Post {
            id: 1,
            title: title.to_string(),
            excerpt: "Short summary".to_string(),
            content: "Soil moisture sensors explained".to_string(),
            category: "tech".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            image: String::new(),
            read_time: String::new(),
            featured: false,
            seo_title: None,
            seo_description: None,
        }
    }

    #[test]
    fn test_tag_prefix_matches() {
        let p = post("Water use", &["Irrigation"]);
        assert!(post_matches(&p, &normalize_term("irrig")));
    }

    #[test]
    fn test_case_insensitive_fields() {
        let p = post("Precision Farming", &[]);
        assert!(post_matches(&p, &normalize_term("PRECISION")));
        assert!(post_matches(&p, &normalize_term("summary")));
        assert!(post_matches(&p, &normalize_term("MOISTURE")));
        assert!(!post_matches(&p, &normalize_term("drone")));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(normalize_term(""), "");
        assert!(post_matches(&post("x", &[]), ""));
    }
}
