//! REST API endpoint implementations.
//!
//! Each endpoint is a free function over a shared `reqwest::Client` and the
//! normalized base URL; [`crate::DocgenClient`] wraps them.

mod generate;
mod health;
mod request;

pub use generate::post_generate;
pub use health::get_health;
pub use request::send_request;
