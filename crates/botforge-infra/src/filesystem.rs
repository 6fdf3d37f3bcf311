//! Data-directory resolution.
//!
//! All persistent state (database, config.toml) lives under a single data
//! directory: `BOTFORGE_DATA_DIR` if set, otherwise `~/.botforge`.

use std::path::PathBuf;

/// Resolve the Botforge data directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BOTFORGE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".botforge")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_ends_with_botforge_without_override() {
        // Only meaningful when the override is unset in the test environment.
        if std::env::var("BOTFORGE_DATA_DIR").is_err() {
            let dir = resolve_data_dir();
            assert!(dir.ends_with(".botforge"));
        }
    }
}
