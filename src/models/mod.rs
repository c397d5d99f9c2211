pub mod config;
pub mod types;

pub use config::Config;
pub use types::{
    category_label, parse_post_date, BlogData, Category, Post, Settings, DEFAULT_POSTS_PER_PAGE,
};
