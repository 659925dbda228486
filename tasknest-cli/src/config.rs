use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tasknest_core::{ClassifierConfig, SupportedLanguage};
use tracing::debug;

use crate::state::ensure_tasknest_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub patterns: PatternsSection,
    #[serde(default)]
    pub classifier: ClassifierSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternsSection {
    /// IANA zone used to bucket timestamps.
    pub timezone: String,
    /// Directory for per-user pattern files; relative to the tasknest home.
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSection {
    /// "auto", or a fixed language: "ru" | "en" | "kz".
    pub language: String,
}

impl Default for PatternsSection {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            data_dir: "patterns".to_string(),
        }
    }
}

impl Default for ClassifierSection {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        tasknest_core::time::parse_tz(&self.patterns.timezone).map_err(|e| anyhow!(e))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        let dir = PathBuf::from(&self.patterns.data_dir);
        if dir.is_absolute() {
            return Ok(dir);
        }
        Ok(ensure_tasknest_home()?.join(dir))
    }

    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        let language = match self.classifier.language.trim() {
            "" | "auto" => None,
            code => Some(code.parse::<SupportedLanguage>().map_err(|e| anyhow!(e))?),
        };
        Ok(ClassifierConfig { language })
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_tasknest_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    debug!(path = %p.display(), timezone = %cfg.patterns.timezone, "loaded config");
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    // Validate before printing so typos surface here
    cfg.timezone()?;
    cfg.classifier_config()?;
    println!("# {}", config_path()?.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
