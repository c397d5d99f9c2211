use pulldown_cmark::{html, Options, Parser};

/// 将文章正文渲染为HTML
///
/// 正文使用空行分段，支持 `## `/`### ` 标题、`**粗体**` 和 `- ` 列表。
/// 整段只有一段粗体文字时作为 `<h4>` 小标题。
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let source = promote_bold_paragraphs(markdown);
    let parser = Parser::new_ext(&source, options);

    let mut html_output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// 将 `**小标题**` 段落改写为四级标题
fn promote_bold_paragraphs(markdown: &str) -> String {
    markdown
        .split("\n\n")
        .map(|block| {
            let inner = block
                .trim()
                .strip_prefix("**")
                .and_then(|rest| rest.strip_suffix("**"));
            match inner {
                Some(text) if is_single_heading(text) => format!("#### {}", text.trim()),
                _ => block.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// 只有一行且中间不再包含粗体标记
fn is_single_heading(text: &str) -> bool {
    !text.trim().is_empty() && !text.contains("**") && !text.contains('\n')
}
