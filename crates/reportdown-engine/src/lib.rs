pub mod blocks;
pub mod highlight;
pub mod inline;
pub mod lines;
pub mod render;
pub mod theme;
pub mod wrap;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use highlight::{Severity, highlight_severity};
pub use render::{RenderOptions, Renderer, render};
