pub mod debounce;
pub mod engine;
pub mod error;
pub mod generator;
pub mod listing;
pub mod loader;
pub mod resolve;
pub mod search;
pub mod server;

pub use debounce::Debouncer;
pub use engine::Engine;
pub use error::{BlogError, BlogResult};
pub use generator::HtmlGenerator;
pub use listing::{
    apply_filter, apply_search, load_more, CategoryFilter, Listing, ListingState, ListingView,
};
pub use loader::{load_blog_data, LoadOutcome};
pub use resolve::{find_post, post_id_from_path, post_id_from_url, resolve_post};
pub use server::Server;
