use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "CROWDFUND";
const CONFIG_FILE: &str = "crowdfund";

/// Environment variables used by older deployments, mapped onto their keys.
const LEGACY_ENV_VARS: [(&str, &str); 5] = [
    ("PORT", "http.port"),
    ("DB_HOST", "database.host"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub http: HttpSettings,
    pub database: DatabaseSettings,
    pub search: SearchSettings,
    pub static_files: StaticFilesSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

/// How the `category` search parameter is compared against category names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    #[default]
    Exact,
    Substring,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub category_match: CategoryMatch,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesSettings {
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Settings {
    /// Loads settings from defaults, `crowdfund.toml`, `.env` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        for (variable, key) in LEGACY_ENV_VARS {
            builder = builder.set_override_option(key, std::env::var(variable).ok())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("http.host", "0.0.0.0")?
            .set_default("http.port", 3000)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 3306)?
            .set_default("database.user", "root")?
            .set_default("database.name", "crowdfunding_db")?
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_secs", 5)?
            .set_default("database.run_migrations", false)?
            .set_default("search.category_match", "exact")?
            .set_default("static_files.directory", "public")?
            .set_default("logging.level", "info")
    }
}
