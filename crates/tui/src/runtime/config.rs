//! Configuration loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Resolve backend configuration from `.env`, environment and CLI flags.
//! - Open the preferences store and read the persisted dark-mode flag.
//! - Save preferences on application exit.
//!
//! Does NOT handle:
//! - Creating the backend client (see `runtime::client`).
//! - Saving preferences on toggle (see `runtime::side_effects::preferences`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - `load_dotenv()` is called before reading the environment.
//! - ConfigManager is wrapped in Arc<Mutex<>> for shared access from tasks.
//! - `--fresh` skips reading persisted state but never disables saving.

use anyhow::{Context, Result};
use docgen_config::{Config, ConfigLoader, ConfigManager, PersistedState};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::app::App;
use crate::cli::Cli;

/// Resolve the backend configuration, applying CLI overrides last.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = ConfigLoader::new()
        .load_dotenv()?
        .from_env()?
        .with_api_base_url(cli.api_url.clone())
        .build()
        .context("invalid backend configuration")?;
    Ok(config)
}

/// Open the preferences store and read persisted state.
///
/// Returns `None` for the persisted state when `--fresh` is set.
pub fn load_config_manager(
    cli: &Cli,
) -> Result<(Arc<Mutex<ConfigManager>>, Option<PersistedState>)> {
    let manager = match cli
        .config_path
        .as_ref()
        .filter(|path| !path.as_os_str().is_empty())
    {
        Some(path) => ConfigManager::new_with_path(path.clone())?,
        None => ConfigManager::new()?,
    };

    let persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default preferences");
        None
    } else {
        Some(manager.load())
    };

    Ok((Arc::new(Mutex::new(manager)), persisted))
}

/// Persist the app's preferences before exiting.
///
/// # Errors
///
/// Returns an error if writing the preferences file fails.
pub async fn save_and_quit(app: &App, config_manager: &Arc<Mutex<ConfigManager>>) -> Result<()> {
    let state = app.persisted_state();
    let mut cm = config_manager.lock().await;
    cm.save(&state)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["docgen-tui"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    #[serial]
    fn test_cli_api_url_wins_over_env() {
        temp_env::with_vars(
            [
                ("DOTENV_DISABLED", Some("1")),
                ("DOCGEN_API_URL", None::<&str>),
                ("VITE_API_URL", Some("http://from-env:8000")),
            ],
            || {
                let config = load_config(&cli(&["--api-url", "http://from-cli:9000/"])).unwrap();
                assert_eq!(config.api.base_url, "http://from-cli:9000");
            },
        );
    }

    #[test]
    #[serial]
    fn test_env_used_without_flag() {
        temp_env::with_vars(
            [
                ("DOTENV_DISABLED", Some("1")),
                ("DOCGEN_API_URL", None::<&str>),
                ("VITE_API_URL", Some("http://from-env:8000")),
            ],
            || {
                let config = load_config(&cli(&[])).unwrap();
                assert_eq!(config.api.base_url, "http://from-env:8000");
            },
        );
    }

    #[tokio::test]
    async fn test_fresh_skips_load_but_save_still_works() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"darkMode":"true"}"#).unwrap();
        let path_arg = path.to_string_lossy().to_string();

        let (manager, persisted) =
            load_config_manager(&cli(&["--config-path", &path_arg, "--fresh"])).unwrap();
        assert!(persisted.is_none());

        let app = App::new(None);
        save_and_quit(&app, &manager).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#""darkMode": "false""#));
    }

    #[test]
    fn test_persisted_dark_mode_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"darkMode":"true"}"#).unwrap();
        let path_arg = path.to_string_lossy().to_string();

        let (_, persisted) = load_config_manager(&cli(&["--config-path", &path_arg])).unwrap();
        assert!(persisted.unwrap().dark_mode);
    }
}
