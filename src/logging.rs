//! Tracing setup — diagnostics go to a file because stdout belongs to the TUI.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log location in the system temp dir.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("termfolio.log")
}

/// Install the global subscriber writing to `log_file_path`.
///
/// Returns false if the file could not be created or a subscriber is
/// already installed; the app runs without logging in that case.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };
    build_subscriber(log_file).try_init().is_ok()
}

/// File logging filtered by `RUST_LOG`, `info` when unset.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn writes_info_to_file() {
        let file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(file.reopen().unwrap());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("session started");
        });

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("session started"));
        assert!(contents.contains("INFO"));
    }

    #[test]
    fn default_path_is_in_temp_dir() {
        let path = default_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.file_name().unwrap(), "termfolio.log");
    }

    #[test]
    fn unwritable_path_is_not_fatal() {
        assert!(!init_global(Path::new("/nonexistent-dir/termfolio.log")));
    }
}
