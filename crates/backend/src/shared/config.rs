use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Shown when the identity proxy forwards no display name
    #[serde(default = "default_guest_name")]
    pub guest_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            guest_name: default_guest_name(),
        }
    }
}

fn default_guest_name() -> String {
    contracts::system::session::GUEST_DISPLAY_NAME.to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "data/orders.db"

[session]
guest_name = "Guest"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Load once and keep the result for the handlers
pub fn initialize() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(load_config)
}

/// Configuration loaded by [`initialize`]
pub fn get_config() -> Option<&'static Config> {
    CONFIG.get()
}

/// Display name for requests without a forwarded identity
pub fn guest_name() -> String {
    get_config()
        .map(|c| c.session.guest_name.clone())
        .unwrap_or_else(default_guest_name)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "data/orders.db");
        assert_eq!(config.session.guest_name, "Guest");
    }

    #[test]
    fn test_session_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [database]
            path = "/var/lib/orders.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.guest_name, "Guest");
        assert_eq!(
            get_database_path(&config),
            PathBuf::from("/var/lib/orders.db")
        );
    }
}
