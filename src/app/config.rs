use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::types::SortKey;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Path or http(s) URL of the catalog document. None = embedded sample.
    #[serde(default)]
    pub catalog_source: Option<String>,
    /// "en" / "ru"; None follows the system locale.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub startup_sort: SortKey,
    #[serde(default)]
    pub startup_tags: Vec<String>,
    /// Write the sidebar state back as startup_* whenever it changes.
    #[serde(default)]
    pub remember_filters: bool,
}

lazy_static! {
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

fn config_file_path() -> PathBuf {
    if let Ok(p) = std::env::var("GALLERY_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("gallery_config.json")
}

impl AppConfig {
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: AppConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(cfg)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }

    /// Catalog source with the GALLERY_CATALOG environment override applied.
    pub fn effective_catalog_source(&self) -> Option<String> {
        resolve_catalog_source(std::env::var("GALLERY_CATALOG").ok(), self.catalog_source.as_deref())
    }
}

fn resolve_catalog_source(env: Option<String>, configured: Option<&str>) -> Option<String> {
    env.filter(|s| !s.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
}

pub fn load_config_from_disk() {
    let path = config_file_path();
    match AppConfig::load_from_file(&path) {
        Ok(cfg) => {
            if let Ok(mut w) = APP_CONFIG.write() {
                *w = cfg;
            }
            log::info!("Loaded config from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default config; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_config_to_disk() {
    let path = config_file_path();
    let cfg = with_config(|c| c.clone());
    if let Err(e) = cfg.save_to_file(&path) {
        log::error!(
            "Failed to save config to {}: {}",
            path.to_string_lossy(),
            e
        );
    } else {
        log::info!("Saved config to {}", path.to_string_lossy());
    }
}

/// Read the global config through a closure. A poisoned lock still yields the data.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&AppConfig) -> R,
{
    let cfg = APP_CONFIG.read().unwrap_or_else(|e| e.into_inner());
    f(&cfg)
}

pub fn with_config_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppConfig) -> R,
{
    let mut cfg = APP_CONFIG.write().unwrap_or_else(|e| e.into_inner());
    f(&mut cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("{}_{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn empty_object_gives_defaults() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.startup_sort, SortKey::None);
    }

    #[test]
    fn save_then_load_from_file() {
        let path = temp_config_path("gallery_config_roundtrip");
        let cfg = AppConfig {
            catalog_source: Some("lib/use-case-data.json".to_string()),
            language: Some("ru".to_string()),
            startup_sort: SortKey::Title,
            startup_tags: vec!["design".to_string()],
            remember_filters: true,
        };
        cfg.save_to_file(&path).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, cfg);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn invalid_file_is_invalid_data() {
        let path = temp_config_path("gallery_config_invalid");
        std::fs::write(&path, "startup_sort = title").unwrap();
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn environment_overrides_configured_source() {
        assert_eq!(
            resolve_catalog_source(Some("https://example.org/d.json".into()), Some("local.json")),
            Some("https://example.org/d.json".to_string())
        );
        assert_eq!(
            resolve_catalog_source(Some(" ".into()), Some("local.json")),
            Some("local.json".to_string())
        );
        assert_eq!(resolve_catalog_source(None, None), None);
    }
}
