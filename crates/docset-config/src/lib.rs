//! Configuration management for docset.
//!
//! Parses `docset.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `search.app_id`
//! - `search.api_key`
//! - `search.index_name`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the content root directory.
    pub content_dir: Option<PathBuf>,
    /// Override the public site URL.
    pub site_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docset.toml";

/// Default manifest filename inside the content root.
const DEFAULT_MANIFEST: &str = "repositories.json";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Site-wide settings for the generated framework configuration.
    pub site: SiteConfig,
    /// Search integration (optional section).
    pub search: Option<SearchConfig>,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    root: Option<String>,
    manifest: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding the manifest and per-set documentation trees.
    pub root: PathBuf,
    /// Manifest filename, relative to `root`.
    pub manifest: String,
}

impl ContentConfig {
    /// Full path to the top-level manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }
}

/// Site-wide settings passed through to the website framework.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public URL of the deployed site.
    pub url: String,
    /// Path under `url` where the site is served.
    pub base_url: String,
    /// Project name used by the deployment pipeline.
    pub project_name: String,
    /// Branch the static build is pushed to.
    pub deployment_branch: String,
    /// Whether generated routes end with a slash.
    pub trailing_slash: bool,
    /// Favicon path relative to the static directory.
    pub favicon: String,
    /// Navbar logo path relative to the static directory.
    pub logo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_owned(),
            base_url: "/".to_owned(),
            project_name: "docs".to_owned(),
            deployment_branch: "gh-pages".to_owned(),
            trailing_slash: false,
            favicon: "img/favicon.ico".to_owned(),
            logo: "img/logo.svg".to_owned(),
        }
    }
}

/// Search-index integration.
#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    /// Search service application id.
    pub app_id: String,
    /// Public search-only API key.
    pub api_key: String,
    /// Index to query.
    pub index_name: String,
}

impl SearchConfig {
    /// Validate that all required fields are set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.app_id, "search.app_id")?;
        require_non_empty(&self.api_key, "search.api_key")?;
        require_non_empty(&self.index_name, "search.index_name")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.api_key`").
        field: String,
        /// Error message (e.g., "${`SEARCH_API_KEY`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docset.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            // Overrides may carry unchecked values (e.g. a bare host as URL)
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.content_resolved.root.clone_from(content_dir);
        }
        if let Some(site_url) = &settings.site_url {
            self.site.url.clone_from(site_url);
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            site: SiteConfig::default(),
            search: None,
            content_resolved: ContentConfig {
                root: base.to_path_buf(),
                manifest: DEFAULT_MANIFEST.to_owned(),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_content()?;
        self.validate_site()?;
        if let Some(search) = &self.search {
            search.validate()?;
        }
        Ok(())
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.content_resolved.manifest, "content.manifest")
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.url, "site.url")?;
        require_http_url(&self.site.url, "site.url")?;

        let base_url = &self.site.base_url;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must start and end with /".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;

        if let Some(ref mut search) = self.search {
            search.app_id = expand::expand_env(&search.app_id, "search.app_id")?;
            search.api_key = expand::expand_env(&search.api_key, "search.api_key")?;
            search.index_name = expand::expand_env(&search.index_name, "search.index_name")?;
        }

        Ok(())
    }

    /// Resolve relative paths against the directory holding the config file.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content_resolved = ContentConfig {
            root: config_dir.join(self.content.root.as_deref().unwrap_or(".")),
            manifest: self
                .content
                .manifest
                .clone()
                .unwrap_or_else(|| DEFAULT_MANIFEST.to_owned()),
        };
    }
}
