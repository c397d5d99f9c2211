use chrono::NaiveDate;

/// 以 en-US 长格式显示日期，例如 `January 5, 2024`
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// 确保路径以斜杠结尾
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// 确保路径以斜杠开头
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// 转义 HTML 属性和文本中的特殊字符
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub mod markdown;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_en_us() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(&date), "January 5, 2024");
    }

    #[test]
    fn test_slashes() {
        assert_eq!(ensure_trailing_slash("blogs"), "blogs/");
        assert_eq!(ensure_leading_slash("blogs/"), "/blogs/");
        assert_eq!(ensure_leading_slash("/"), "/");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"Soil & "Water""#), "Soil &amp; &quot;Water&quot;");
    }
}
