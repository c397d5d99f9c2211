pub mod core;
pub mod forms;
pub mod models;
pub mod seo;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{BlogError, Engine, Listing, ListingState, ListingView, LoadOutcome};
pub use crate::models::{BlogData, Category, Config, Post, Settings};
pub use crate::theme::ThemeRenderer;
