//! Shared UI widgets for common rendering patterns.
//!
//! This module provides the loading indicator shown while documentation is
//! being generated and the banners stacked above the body.

pub mod banner;
pub mod loading;

pub use banner::{
    BACKEND_BANNER_HEIGHT, error_banner_height, render_backend_banner, render_error_banner,
};
pub use loading::{LOADING_STAGES, StageStatus, render_loading_indicator};
