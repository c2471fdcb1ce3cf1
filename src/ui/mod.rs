mod renderer;
mod state;
pub mod theme;

pub use renderer::{max_content_scroll, render, tab_at_column};
pub use state::{AppState, Focus, Tab};
pub use theme::Theme;
