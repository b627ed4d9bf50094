// config.rs — CLI configuration: where state lives on disk.
//
// Everything the CLI persists sits under one data directory:
//   <data_dir>/store/        — the key-value namespace (applications, user)
//   <data_dir>/events.jsonl  — the lifecycle event log

use std::path::PathBuf;

/// Resolved on-disk layout for a CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root data directory.
    pub data_dir: PathBuf,

    /// Key-value namespace directory.
    pub store_dir: PathBuf,

    /// Append-only lifecycle event log.
    pub events_log: PathBuf,
}

impl CliConfig {
    /// Build the layout under `override_dir`, or the platform default.
    pub fn for_data_dir(override_dir: Option<PathBuf>) -> Self {
        let data_dir = override_dir.unwrap_or_else(default_data_dir);
        Self {
            store_dir: data_dir.join("store"),
            events_log: data_dir.join("events.jsonl"),
            data_dir,
        }
    }
}

/// Platform data dir plus `krewly`, falling back to a local dot-directory
/// when the platform offers none.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("krewly"))
        .unwrap_or_else(|| PathBuf::from(".krewly"))
}
