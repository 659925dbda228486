use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$TASKNEST_HOME`, else `~/.tasknest`.
pub fn tasknest_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TASKNEST_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tasknest"))
}

pub fn ensure_tasknest_home() -> Result<PathBuf> {
    let dir = tasknest_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
