use confique::Config;
use std::path::Path;
use thiserror::Error;
use url::Url;

pub use self::cli::Cli;
pub mod cli;

/// Settings read from the environment and an optional `settings.toml`.
///
/// Command line flags take precedence over these.
#[derive(Debug, Config)]
pub struct ShimSettings {
    #[config(env = "ES_INDEX_STATS_NAME")]
    pub name: Option<String>,

    #[config(env = "ES_INDEX_STATS_ADDR", default = "http://localhost:9200")]
    pub addr: String,

    #[config(env = "ES_INDEX_STATS_INDICES", default = "*")]
    pub indices: String,

    #[config(env = "ES_INDEX_STATS_DEBUG", default = false)]
    pub debug: bool,

    #[config(env = "ES_INDEX_STATS_STDERR", default = false)]
    pub stderr: bool,
}

impl ShimSettings {
    pub fn load() -> Result<ShimSettings, ConfigError> {
        let c = ShimSettings::builder()
            .env()
            .file("settings.toml")
            .load()?;

        Ok(c)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load settings")]
    Settings(#[from] confique::Error),

    #[error("Invalid base URL {addr}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: url::ParseError,
    },
}

/// Resolved configuration of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShimConfig {
    pub check_name: String,
    pub base_url: Url,
    pub indices: String,
    pub debug: bool,
    pub stderr: bool,
}

impl ShimConfig {
    pub fn resolve(cli: Cli, settings: ShimSettings) -> Result<ShimConfig, ConfigError> {
        let base_url = match cli.addr {
            Some(url) => url,
            None => Url::parse(&settings.addr).map_err(|source| ConfigError::InvalidAddr {
                addr: settings.addr.clone(),
                source,
            })?,
        };

        Ok(ShimConfig {
            check_name: cli
                .name
                .or(settings.name)
                .unwrap_or_else(program_name),
            base_url,
            indices: cli.indices.unwrap_or(settings.indices),
            debug: cli.debug || settings.debug,
            stderr: cli.stderr || settings.stderr,
        })
    }

    pub fn load(cli: Cli) -> Result<ShimConfig, ConfigError> {
        Self::resolve(cli, ShimSettings::load()?)
    }
}

/// Basename of the invoked binary, or the package name when unavailable.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
