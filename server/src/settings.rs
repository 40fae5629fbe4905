//! Service settings
//!
//! Settings come from an optional JSON file, then environment overrides.

use export::PdfExportOptions;
use generation::{GenerationConfig, GeneratorOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub server: ServerSettings,
    pub generation: GenerationSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Largest accepted JSON body
    pub json_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            json_limit_bytes: 4 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub synthesize_elements: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let config = GenerationConfig::default();
        Self {
            base_url: config.base_url,
            model: config.model,
            temperature: config.temperature,
            timeout_secs: config.timeout_secs,
            synthesize_elements: true,
        }
    }
}

impl GenerationSettings {
    /// Client configuration; the API key only ever comes from the environment
    pub fn client_config(&self, api_key: Option<String>) -> GenerationConfig {
        GenerationConfig {
            api_key,
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout_secs: self.timeout_secs,
        }
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            synthesize_elements: self.synthesize_elements,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportSettings {
    /// Device-pixel ratio used when rasterizing slides
    pub scale: f64,
    pub page_width: f64,
    pub page_height: f64,
    pub text_layer: bool,
    pub compress: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let pdf = PdfExportOptions::default();
        Self {
            scale: export::DEFAULT_SCALE,
            page_width: pdf.page_width,
            page_height: pdf.page_height,
            text_layer: pdf.text_layer,
            compress: pdf.compress,
        }
    }
}

impl ExportSettings {
    pub fn pdf_options(&self) -> PdfExportOptions {
        PdfExportOptions::default()
            .with_page_size(self.page_width, self.page_height)
            .with_text_layer(self.text_layer)
            .with_compression(self.compress)
    }
}

/// Loads settings from disk and the environment
pub struct SettingsManager {
    settings_path: PathBuf,
    current: AppSettings,
}

impl SettingsManager {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            current: AppSettings::default(),
        }
    }

    /// Manager for `PRESENTER_SETTINGS`, or `settings.json` in the working directory
    pub fn from_env() -> Self {
        let path = std::env::var("PRESENTER_SETTINGS").unwrap_or_else(|_| "settings.json".to_string());
        Self::new(path)
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load the settings file if present; an unreadable file falls back to defaults
    pub fn load_sync(&mut self) -> anyhow::Result<&AppSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            match serde_json::from_str::<AppSettings>(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        path = %self.settings_path.display(),
                        "Failed to parse settings file, using defaults: {}",
                        e
                    );
                    AppSettings::default()
                }
            }
        } else {
            tracing::debug!(path = %self.settings_path.display(), "no settings file, using defaults");
            AppSettings::default()
        };
        Ok(&self.current)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let set = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        if let Some(host) = set("PRESENTER_HOST") {
            self.current.server.host = host;
        }
        if let Some(port) = set("PRESENTER_PORT") {
            match port.trim().parse() {
                Ok(port) => self.current.server.port = port,
                Err(_) => tracing::warn!(value = %port, "ignoring invalid PRESENTER_PORT"),
            }
        }
        if let Some(url) = set("OPENAI_BASE_URL") {
            self.current.generation.base_url = url;
        }
        if let Some(model) = set("OPENAI_MODEL") {
            self.current.generation.model = model;
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub fn get(&self) -> &AppSettings {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(dir.path().join("settings.json"));
        assert_eq!(manager.load_sync().unwrap(), &AppSettings::default());
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"server":{"port":9000},"export":{"textLayer":false}}"#).unwrap();

        let mut manager = SettingsManager::new(&path);
        let settings = manager.load_sync().unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert!(!settings.export.text_layer);
        assert_eq!(settings.export.scale, 2.0);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        let mut manager = SettingsManager::new(&path);
        assert_eq!(manager.load_sync().unwrap(), &AppSettings::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PRESENTER_PORT", "3001"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("PRESENTER_HOST", "  "),
        ]
        .into_iter()
        .collect();
        let mut manager = SettingsManager::new("unused.json");
        manager.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        let settings = manager.get();
        assert_eq!(settings.server.port, 3001);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.generation.model, "gpt-4o-mini");
    }

    #[test]
    fn test_invalid_port_ignored() {
        let mut manager = SettingsManager::new("unused.json");
        manager.apply_overrides(|name| (name == "PRESENTER_PORT").then(|| "eighty".to_string()));
        assert_eq!(manager.get().server.port, 8080);
    }

    #[test]
    fn test_client_config_carries_key() {
        let config = GenerationSettings::default().client_config(Some("sk-test".into()));
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "gpt-4-turbo-preview");
    }
}
