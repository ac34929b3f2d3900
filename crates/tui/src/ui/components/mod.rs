//! Reusable UI components for the TUI.
//!
//! - [`MarkdownRenderer`]: Markdown to text renderer with highlighted code blocks

pub mod markdown;

pub use markdown::MarkdownRenderer;
