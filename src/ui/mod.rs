// UI and formatting module

pub mod logo;
pub mod renderer;

// Re-export commonly used items for cleaner imports
pub use logo::LOGO;
pub use renderer::{render, RenderStyle};
