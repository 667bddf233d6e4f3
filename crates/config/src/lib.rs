pub mod schema;
pub mod watcher;

pub use schema::{BarConfig, BarSection, OutputFormat, RenderConfig, SegmentConfig, ThemeConfig};
pub use watcher::ConfigWatcher;

use segbar_core::{Result, SegBarError};
use std::path::{Path, PathBuf};

/// Load a bar description from a TOML file.  Returns `BarConfig::default()`
/// if the file doesn't exist so there is always something to draw.
pub fn load(path: impl AsRef<Path>) -> Result<BarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BarConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| SegBarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse a bar description from TOML text.
pub fn parse(raw: &str) -> Result<BarConfig> {
    toml::from_str(raw).map_err(|e| SegBarError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("segbar").join("segbar.toml")
}
