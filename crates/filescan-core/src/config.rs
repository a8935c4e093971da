use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

/// Optional settings read from `Config.toml` in the working directory.
/// Command-line flags take precedence over file values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Fallback store path when `--db` is not given.
    #[serde(default)]
    pub db_path: Option<String>,
    /// Glob patterns the walker skips entirely.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
