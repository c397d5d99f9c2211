pub mod renderer;

pub use renderer::{ArticleCard, ThemeRenderer};
