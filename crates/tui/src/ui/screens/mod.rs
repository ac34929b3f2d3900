//! Screen body renderers.
//!
//! Each screen takes a borrowed `*RenderConfig` snapshot of the state it
//! draws, so rendering never mutates `App`.

pub mod repo_input;
pub mod viewer;

pub use repo_input::{RepoInputRenderConfig, render_repo_input};
pub use viewer::{ViewerRenderConfig, render_viewer};
