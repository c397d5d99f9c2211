use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::error::BlogResult;
use crate::core::loader::LoadOutcome;
use crate::core::resolve;
use crate::core::search::{normalize_term, post_matches};
use crate::models::{BlogData, Category, Post};

/// 分类筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum CategoryFilter {
    /// 全部分类
    #[default]
    All,
    /// 指定分类ID
    Category(String),
}

impl CategoryFilter {
    /// 表示全部分类的标记
    pub const ALL: &'static str = "all";

    /// 从筛选按钮的分类值解析
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// 分类值
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Category(id) => id,
        }
    }

    /// 文章是否属于该筛选条件
    pub fn accepts(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => post.category == *id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// 列表状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingState {
    /// 当前分类筛选
    pub current_filter: CategoryFilter,
    /// 当前搜索词（小写，空表示不搜索）
    pub search_term: String,
    /// 当前页码，从 1 开始
    pub current_page: usize,
}

impl ListingState {
    /// 静态站点中该状态对应的列表页文件名（搜索词不参与）
    pub fn page_file_name(&self) -> String {
        listing_file_name(&self.current_filter, self.current_page)
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            current_filter: CategoryFilter::All,
            search_term: String::new(),
            current_page: 1,
        }
    }
}

/// 切换分类，页码重置为 1，保留搜索词
pub fn apply_filter(state: &ListingState, category: &str) -> ListingState {
    ListingState {
        current_filter: CategoryFilter::parse(category),
        search_term: state.search_term.clone(),
        current_page: 1,
    }
}

/// 更新搜索词，页码重置为 1，保留分类筛选
pub fn apply_search(state: &ListingState, term: &str) -> ListingState {
    ListingState {
        current_filter: state.current_filter.clone(),
        search_term: normalize_term(term),
        current_page: 1,
    }
}

/// 加载更多：页码加 1
pub fn load_more(state: &ListingState) -> ListingState {
    ListingState {
        current_page: state.current_page + 1,
        ..state.clone()
    }
}

/// 列表页文件名
///
/// `index.html`、`page-<n>.html`、`category-<id>.html`、`category-<id>-<n>.html`。
/// 文件名中不出现 `/<数字>.html`，不会被当成文章地址。
pub fn listing_file_name(filter: &CategoryFilter, page: usize) -> String {
    match filter {
        CategoryFilter::All if page <= 1 => "index.html".to_string(),
        CategoryFilter::All => format!("page-{}.html", page),
        CategoryFilter::Category(id) if page <= 1 => format!("category-{}.html", file_slug(id)),
        CategoryFilter::Category(id) => format!("category-{}-{}.html", file_slug(id), page),
    }
}

// 分类ID中不适合出现在文件名里的字符替换为 '-'
fn file_slug(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect()
}

/// 按状态筛选文章，保持原有顺序
pub fn filter_posts<'a>(posts: &'a [Post], state: &ListingState) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| state.current_filter.accepts(post))
        .filter(|post| post_matches(post, &state.search_term))
        .collect()
}

/// 选择推荐文章：第一篇标记为推荐的文章，没有则取第一篇
pub fn select_featured<'a>(filtered: &[&'a Post]) -> Option<&'a Post> {
    filtered
        .iter()
        .find(|post| post.featured)
        .or_else(|| filtered.first())
        .copied()
}

/// 当前页面的列表视图
#[derive(Debug, Clone, Serialize)]
pub struct ListingView<'a> {
    /// 推荐文章
    pub featured: Option<&'a Post>,
    /// 可见文章（从第一篇开始的前缀）
    pub visible: Vec<&'a Post>,
    /// 筛选后的文章总数
    pub total: usize,
    /// 是否还有更多文章
    pub has_more: bool,
    /// 剩余未显示的文章数
    pub remaining: usize,
    /// 当前页码
    pub page: usize,
}

impl<'a> ListingView<'a> {
    /// 由筛选结果和分页参数构建视图
    pub fn build(filtered: Vec<&'a Post>, page: usize, posts_per_page: usize) -> Self {
        let total = filtered.len();
        let shown = page.saturating_mul(posts_per_page);
        let featured = select_featured(&filtered);
        let mut visible = filtered;
        visible.truncate(shown);

        Self {
            featured,
            visible,
            total,
            has_more: shown < total,
            remaining: total.saturating_sub(shown),
            page,
        }
    }

    /// 是否没有任何匹配的文章
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// "加载更多" 按钮文本
    pub fn load_more_label(&self) -> Option<String> {
        self.has_more
            .then(|| format!("Load More Articles ({} remaining)", self.remaining))
    }
}

/// 博客列表引擎
///
/// 持有整个会话的全部文章，每次筛选、搜索或翻页后同步重新计算视图。
#[derive(Debug, Clone, Default)]
pub struct Listing {
    data: BlogData,
    state: ListingState,
}

impl Listing {
    /// 创建列表引擎，`data` 中的文章应已按日期倒序排列
    pub fn new(data: BlogData) -> Self {
        Self {
            data,
            state: ListingState::default(),
        }
    }

    /// 从加载结果创建列表引擎
    pub fn from_outcome(outcome: LoadOutcome) -> Self {
        Self::new(outcome.into_data())
    }

    pub fn data(&self) -> &BlogData {
        &self.data
    }

    pub fn posts(&self) -> &[Post] {
        &self.data.posts
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn posts_per_page(&self) -> usize {
        self.data.settings.posts_per_page()
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// 按分类筛选
    pub fn filter_by_category(&mut self, category: &str) {
        self.state = apply_filter(&self.state, category);
        debug!("Filter by category: {}", self.state.current_filter);
    }

    /// 搜索文章
    pub fn search(&mut self, term: &str) {
        self.state = apply_search(&self.state, term);
        debug!("Search term: {:?}", self.state.search_term);
    }

    /// 加载更多文章
    pub fn load_more(&mut self) {
        self.state = load_more(&self.state);
        debug!("Load more, page {}", self.state.current_page);
    }

    /// 当前筛选结果
    pub fn filtered(&self) -> Vec<&Post> {
        filter_posts(&self.data.posts, &self.state)
    }

    /// 当前筛选结果分页后的页数，至少为 1
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.posts_per_page()).max(1)
    }

    /// 当前视图
    pub fn view(&self) -> ListingView<'_> {
        ListingView::build(self.filtered(), self.state.current_page, self.posts_per_page())
    }

    /// 分类显示名称
    pub fn category_label<'a>(&'a self, category_id: &'a str) -> &'a str {
        self.data.category_label(category_id)
    }

    /// 按ID查找文章
    pub fn post(&self, id: u64) -> BlogResult<&Post> {
        resolve::find_post(&self.data.posts, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_resets_page_and_keeps_search() {
        let state = ListingState {
            current_filter: CategoryFilter::All,
            search_term: "soil".to_string(),
            current_page: 3,
        };
        let next = apply_filter(&state, "crops");
        assert_eq!(next.current_page, 1);
        assert_eq!(next.search_term, "soil");
        assert_eq!(next.current_filter, CategoryFilter::Category("crops".to_string()));
    }

    #[test]
    fn test_search_resets_page_and_keeps_filter() {
        let state = ListingState {
            current_filter: CategoryFilter::parse("crops"),
            search_term: String::new(),
            current_page: 2,
        };
        let next = apply_search(&state, "Drones");
        assert_eq!(next.current_page, 1);
        assert_eq!(next.search_term, "drones");
        assert_eq!(next.current_filter.as_str(), "crops");
    }

    #[test]
    fn test_load_more_increments_page_only() {
        let state = apply_search(&ListingState::default(), "x");
        let next = load_more(&load_more(&state));
        assert_eq!(next.current_page, 3);
        assert_eq!(next.search_term, "x");
    }

    #[test]
    fn test_all_sentinel() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }

    #[test]
    fn test_listing_file_names() {
        let state = ListingState::default();
        assert_eq!(state.page_file_name(), "index.html");
        assert_eq!(load_more(&state).page_file_name(), "page-2.html");

        let state = apply_filter(&state, "smart farming");
        assert_eq!(state.page_file_name(), "category-smart-farming.html");
        assert_eq!(load_more(&state).page_file_name(), "category-smart-farming-2.html");

        // 搜索词不影响文件名
        let state = apply_search(&state, "drip");
        assert_eq!(state.page_file_name(), "category-smart-farming.html");
        assert_eq!(resolve::post_id_from_path("/blogs/page-2.html"), None);
    }

    #[test]
    fn test_empty_view() {
        let view = ListingView::build(Vec::new(), 1, 6);
        assert!(view.is_empty());
        assert!(view.featured.is_none());
        assert!(view.visible.is_empty());
        assert!(!view.has_more);
        assert_eq!(view.load_more_label(), None);
    }
}
