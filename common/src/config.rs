// common/src/config.rs
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use config::{Config as ConfigFile, File, Environment};

/// Signing key shipped with the demo. Anyone holding the source can forge tokens,
/// so real deployments must override it through `APP__AUTH__SECRET`.
pub const DEFAULT_TOKEN_SECRET: &str =
    "35063ceca085c152603b5aa586811f9954e47715fe2a7aa81e43cb8d2cc83d40";

/// Central configuration for the web server
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub web_server_addr: String,
    /// JSON user list to load instead of the bundled one
    #[serde(default)]
    pub users_path: Option<String>,
    pub auth: AuthConfig,

    // Static file serving configuration
    pub static_files: StaticFilesConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    pub secret: String,
    pub token_ttl_seconds: i64,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    pub path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_TOKEN_SECRET.to_string(),
            token_ttl_seconds: 300,
            cookie_name: "LoginToken".to_string(),
            cookie_secure: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_addr: "127.0.0.1:8081".to_string(),
            users_path: None,
            auth: AuthConfig::default(),
            static_files: StaticFilesConfig {
                path: "./web-server/static".to_string(),
            },
        }
    }
}

impl AuthConfig {
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_seconds)
    }
}

impl Config {
    /// Locate the config directory
    fn config_dir() -> PathBuf {
        env::var("CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Check if we're in the project root or a subcrate
                let mut path = PathBuf::from("./config");
                if !path.exists() {
                    path = PathBuf::from("../config");
                }
                path
            })
    }

    /// Directory that relative paths in the settings are resolved against:
    /// the one holding `config/`, i.e. the workspace root
    fn base_dir() -> PathBuf {
        Self::config_dir()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Anchor relative file paths at `base` so the server finds its files
    /// whether it is started from the workspace root or from `web-server/`
    pub fn resolve_paths(&mut self, base: &Path) {
        self.static_files.path = resolve(base, &self.static_files.path);
        if let Some(users_path) = self.users_path.as_mut() {
            *users_path = resolve(base, users_path);
        }
    }

    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        // Get the run mode, defaulting to "development"
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config_dir = Self::config_dir();

        tracing::info!("Loading configuration from {}", config_dir.display());
        tracing::info!("Using run mode: {}", run_mode);

        let defaults = Self::default();

        let mut config: Self = ConfigFile::builder()
            // Built-in defaults so a missing default.toml still yields a usable config
            .set_default("web_server_addr", defaults.web_server_addr)?
            .set_default("auth.secret", defaults.auth.secret)?
            .set_default("auth.token_ttl_seconds", defaults.auth.token_ttl_seconds)?
            .set_default("auth.cookie_name", defaults.auth.cookie_name)?
            .set_default("auth.cookie_secure", defaults.auth.cookie_secure)?
            .set_default("static_files.path", defaults.static_files.path)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add environment specific config
            .add_source(File::from(config_dir.join(format!("{}.toml", run_mode))).required(false))
            // Add a local config file for local overrides
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment variables with prefix "APP"
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        config.resolve_paths(&Self::base_dir());
        Ok(config)
    }

    /// Load from environment variables directly (backward compatibility)
    pub fn from_env() -> Self {
        // Try to load from file first
        match Self::load() {
            Ok(config) => {
                tracing::info!("Configuration loaded from files and environment");
                config
            },
            Err(e) => {
                tracing::warn!("Failed to load configuration from files: {}", e);
                tracing::info!("Falling back to environment variables only");

                let defaults = Self::default();

                let web_server_addr = env::var("WEB_SERVER_ADDR")
                    .unwrap_or(defaults.web_server_addr);

                let users_path = env::var("USERS_PATH").ok();

                let secret = env::var("TOKEN_SECRET")
                    .unwrap_or(defaults.auth.secret);

                let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
                    .ok()
                    .and_then(|v| v.parse::<i64>().ok())
                    .unwrap_or(defaults.auth.token_ttl_seconds);

                let cookie_secure = env::var("COOKIE_SECURE")
                    .map(|v| v.to_lowercase() == "true")
                    .unwrap_or(defaults.auth.cookie_secure);

                let static_files_path = env::var("STATIC_FILES_PATH")
                    .unwrap_or(defaults.static_files.path);

                let mut config = Self {
                    web_server_addr,
                    users_path,
                    auth: AuthConfig {
                        secret,
                        token_ttl_seconds,
                        cookie_name: defaults.auth.cookie_name,
                        cookie_secure,
                    },
                    static_files: StaticFilesConfig {
                        path: static_files_path,
                    },
                };
                config.resolve_paths(&Self::base_dir());
                config
            }
        }
    }

    /// True while the shipped signing key is still in use
    pub fn uses_default_secret(&self) -> bool {
        self.auth.secret == DEFAULT_TOKEN_SECRET
    }
}

fn resolve(base: &Path, path: &str) -> String {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_string_lossy().into_owned();
    }
    base.join(path).to_string_lossy().into_owned()
}
