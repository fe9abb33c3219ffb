//! Application configuration
//!
//! Configuration loaded from the cv-timeline.toml file. Every field has a
//! default pointing at the public résumé repository the app was built for,
//! so the file is optional.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from cv-timeline.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Repository owner (user or organization)
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Path of the tracked document inside the repository
    #[serde(default = "default_file_path")]
    pub file_path: String,

    /// REST API host
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Raw file host
    #[serde(default = "default_raw_host")]
    pub raw_host: String,

    /// Hosted viewer page used by the native display mode
    #[serde(default = "default_viewer_endpoint")]
    pub viewer_endpoint: String,
}

fn default_owner() -> String {
    "renanbazinin".to_string()
}

fn default_repo() -> String {
    "CV-RENAN".to_string()
}

fn default_file_path() -> String {
    "CV-RenanBazinin.pdf".to_string()
}

fn default_api_host() -> String {
    "https://api.github.com".to_string()
}

fn default_raw_host() -> String {
    "https://raw.githubusercontent.com".to_string()
}

fn default_viewer_endpoint() -> String {
    "https://mozilla.github.io/pdf.js/web/viewer.html".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            file_path: default_file_path(),
            api_host: default_api_host(),
            raw_host: default_raw_host(),
            viewer_endpoint: default_viewer_endpoint(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.owner, "renanbazinin");
        assert_eq!(config.repo, "CV-RENAN");
        assert_eq!(config.file_path, "CV-RenanBazinin.pdf");
        assert_eq!(config.api_host, "https://api.github.com");
        assert_eq!(config.raw_host, "https://raw.githubusercontent.com");
        assert!(config.viewer_endpoint.ends_with("viewer.html"));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            owner = "octocat"
            repo = "hello-world"
            file_path = "docs/resume.pdf"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.owner, "octocat");
        assert_eq!(config.repo, "hello-world");
        assert_eq!(config.file_path, "docs/resume.pdf");
        // Hosts should use defaults
        assert_eq!(config.api_host, "https://api.github.com");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            owner = "octocat"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.owner, "octocat");
        // Other fields should use defaults
        assert_eq!(config.repo, "CV-RENAN");
        assert_eq!(config.file_path, "CV-RenanBazinin.pdf");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
