//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/cv-timeline/`, `~/.cache/cv-timeline/`
//! - macOS: `~/Library/Application Support/cv-timeline/`, `~/Library/Caches/cv-timeline/`
//! - Windows: `%APPDATA%\cv-timeline\`, `%LOCALAPPDATA%\cv-timeline\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "cv-timeline";

/// Get the application config directory
/// Returns ~/.config/cv-timeline/ on Linux, ~/Library/Application Support/cv-timeline/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/cv-timeline/ on Linux, ~/Library/Caches/cv-timeline/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
