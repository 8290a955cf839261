use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const PORT_ENV: &str = "LAWBLOG_PORT";
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Written into the `config.toml` generated by `lawblog init`.
pub const INIT_DATABASE_URL: &str = "sqlite:data/lawblog.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub llm: LlmConfig,

    pub generation: GenerationConfig,

    pub server: ServerConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Database connection string. `sqlite:` and `postgres://` URLs are accepted.
    /// Empty by default: it must come from `DATABASE_URL` or a config file.
    pub database_url: String,

    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Gemini API key. Usually supplied through `GOOGLE_API_KEY`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,

    pub base_url: String,

    pub model: String,

    pub temperature: f32,

    /// Request timeout in seconds (default: 120)
    pub request_timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.5,
            request_timeout_seconds: 120,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Titles requested for a topic when the caller gives no count.
    pub default_count: i32,

    /// Largest count an admin may request in one batch.
    pub max_count: i32,

    /// Size of the trending headline list.
    pub trending_limit: usize,

    /// Minimum spacing between the starts of two model calls, process-wide.
    pub min_call_interval_ms: u64,

    /// Model calls allowed in flight at once, process-wide.
    pub max_concurrent_calls: usize,

    /// Outcome of topic classification when the model call itself fails.
    pub classifier_fail_open: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_count: 3,
            max_count: 10,
            trending_limit: 6,
            min_call_interval_ms: 1500,
            max_concurrent_calls: 1,
            classifier_fail_open: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    pub cors_allowed_origins: Vec<String>,

    /// When set, admin routes require this key in `X-Api-Key` or as a bearer token.
    pub admin_api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8001,
            cors_allowed_origins: vec![
                "https://ai-legalmate.vercel.app".to_string(),
                "http://127.0.0.1:5173".to_string(),
                "http://localhost:5173".to_string(),
            ],
            admin_api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,

    pub loki_labels: std::collections::HashMap<String, String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        let mut labels = std::collections::HashMap::new();
        labels.insert("app".to_string(), "lawblog".to_string());

        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
            loki_labels: labels,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            llm: LlmConfig::default(),
            generation: GenerationConfig::default(),
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// Loads the first config file found, then applies `.env` and environment overrides.
    pub fn load() -> Result<Self> {
        // A missing .env file is normal in production.
        dotenvy::dotenv().ok();

        let mut config = Self::load_file()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Environment values win over the file. `lookup` is injected so tests
    /// don't have to touch the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.llm.api_key = key.trim().to_string();
        }

        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.general.database_url = normalize_database_url(url.trim());
        }

        if let Some(port) = lookup(PORT_ENV).and_then(|v| v.trim().parse().ok()) {
            self.server.port = port;
        }

        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.llm.model = model.trim().to_string();
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("lawblog").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".lawblog").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            Self::init_template().save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    /// Defaults plus an explicit local SQLite database.
    #[must_use]
    pub fn init_template() -> Self {
        let mut config = Self::default();
        config.general.database_url = INIT_DATABASE_URL.to_string();
        config
    }

    /// The only check commands that never call the model need.
    pub fn require_database_url(&self) -> Result<()> {
        if self.general.database_url.trim().is_empty() {
            anyhow::bail!(
                "Database URL not found. Set {DATABASE_URL_ENV} or general.database_url in config.toml"
            );
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            anyhow::bail!("API key not found. Set {API_KEY_ENV} in the environment or .env file");
        }

        self.require_database_url()?;

        if self.llm.model.trim().is_empty() {
            anyhow::bail!("LLM model name cannot be empty");
        }

        if self.generation.max_concurrent_calls == 0 {
            anyhow::bail!("generation.max_concurrent_calls must be > 0");
        }

        if self.generation.trending_limit == 0 {
            anyhow::bail!("generation.trending_limit must be > 0");
        }

        if self.generation.default_count <= 0
            || self.generation.default_count > self.generation.max_count
        {
            anyhow::bail!(
                "generation.default_count must be between 1 and generation.max_count ({})",
                self.generation.max_count
            );
        }

        Ok(())
    }
}

/// Hosting providers hand out `postgresql://` URLs; sqlx only wants the scheme it knows.
#[must_use]
pub fn normalize_database_url(url: &str) -> String {
    url.strip_prefix("postgresql://")
        .map_or_else(|| url.to_string(), |rest| format!("postgres://{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.llm.api_key = "test-key".to_string();
        config.general.database_url = "sqlite::memory:".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.generation.default_count, 3);
        assert_eq!(config.generation.trending_limit, 6);
        assert_eq!(config.generation.min_call_interval_ms, 1500);
        assert!(config.generation.classifier_fail_open);
        assert_eq!(config.llm.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[generation]"));
        assert!(toml_str.contains("[server]"));
        assert!(!toml_str.contains("api_key"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [generation]
            min_call_interval_ms = 0
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.generation.min_call_interval_ms, 0);

        assert_eq!(config.generation.max_concurrent_calls, 1);
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn missing_database_url_is_fatal() {
        let env: HashMap<&str, &str> = HashMap::from([(API_KEY_ENV, "secret")]);

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(ToString::to_string));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(DATABASE_URL_ENV));
    }

    #[test]
    fn database_only_commands_skip_api_key_check() {
        let mut config = Config::default();
        assert!(config.require_database_url().is_err());

        config.general.database_url = "sqlite::memory:".to_string();
        assert!(config.require_database_url().is_ok());
        assert!(config.validate().is_err());
    }

    #[test]
    fn init_template_names_a_database() {
        let config = Config::init_template();
        assert_eq!(config.general.database_url, INIT_DATABASE_URL);

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("database_url = \"sqlite:data/lawblog.db\""));
    }

    #[test]
    fn empty_database_url_is_fatal() {
        let mut config = valid_config();
        config.general.database_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_count_must_fit_max() {
        let mut config = valid_config();
        config.generation.default_count = 20;
        assert!(config.validate().is_err());

        config.generation.default_count = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides_take_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            (API_KEY_ENV, " secret "),
            (DATABASE_URL_ENV, "postgresql://user:pw@db:5432/blogs"),
            (PORT_ENV, "9000"),
        ]);

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.llm.api_key, "secret");
        assert_eq!(
            config.general.database_url,
            "postgres://user:pw@db:5432/blogs"
        );
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.llm.model, "gemini-2.5-flash");
    }

    #[test]
    fn normalize_leaves_other_schemes_alone() {
        assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_database_url("postgres://localhost/db"),
            "postgres://localhost/db"
        );
    }
}
