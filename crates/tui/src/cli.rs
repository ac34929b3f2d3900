//! Command-line argument parsing for docgen-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for docgen-tui.
///
/// Backend URL precedence (highest to lowest):
/// 1. `--api-url` (or `DOCGEN_API_URL` through clap)
/// 2. Environment variables / `.env` (`DOCGEN_API_URL`, then `VITE_API_URL`)
/// 3. `http://localhost:8000`
#[derive(Debug, Parser)]
#[command(
    name = "docgen-tui",
    about = "Generate beginner, intermediate, and advanced documentation for any public GitHub repository",
    version,
    after_help = "Examples:\n  docgen-tui\n  docgen-tui --api-url http://localhost:8000\n  docgen-tui --output-dir ~/docs --no-mouse\n  docgen-tui --fresh\n"
)]
pub struct Cli {
    /// Base URL of the documentation backend
    #[arg(long, env = "DOCGEN_API_URL")]
    pub api_url: Option<String>,

    /// Path to a custom preferences file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Directory downloaded documentation is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with fresh state, ignoring any persisted preferences
    #[arg(long)]
    pub fresh: bool,
}
