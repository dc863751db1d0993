//! Service configuration
//!
//! Settings resolve in priority order: command-line argument, environment
//! variable, TOML config file, compiled default. The defaults point at a
//! local store and match what the service has always listened on, so a bare
//! `knox-albums` starts with zero configuration.

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORE_URI: &str = "mongodb://localhost:27017/";
const DEFAULT_DATABASE: &str = "knoxAlbums";
const DEFAULT_COLLECTION: &str = "albums";

/// Command-line arguments. Each falls back to its environment variable
/// before the config file and compiled defaults are consulted.
#[derive(Debug, Default, Parser)]
#[command(name = "knox-albums", version, about = "Album catalog HTTP service")]
pub struct Cli {
    /// TCP port to listen on
    #[arg(long, env = "KNOX_ALBUMS_PORT")]
    pub port: Option<u16>,

    /// Document store connection string
    #[arg(long, env = "KNOX_ALBUMS_STORE_URI")]
    pub store_uri: Option<String>,

    /// Database holding the albums collection
    #[arg(long, env = "KNOX_ALBUMS_DATABASE")]
    pub database: Option<String>,

    /// Collection holding album documents
    #[arg(long, env = "KNOX_ALBUMS_COLLECTION")]
    pub collection: Option<String>,
}

/// Optional overrides read from `config.toml`
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    port: Option<u16>,
    store_uri: Option<String>,
    database: Option<String>,
    collection: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store_uri: String,
    pub database: String,
    pub collection: String,
}

impl Config {
    /// Resolve configuration from all sources.
    pub fn resolve(cli: Cli) -> Self {
        let file = config_file_path()
            .and_then(|path| load_config_file(&path))
            .unwrap_or_default();
        Self::merge(cli, file)
    }

    fn merge(cli: Cli, file: FileConfig) -> Self {
        Self {
            port: cli.port.or(file.port).unwrap_or(DEFAULT_PORT),
            store_uri: cli
                .store_uri
                .or(file.store_uri)
                .unwrap_or_else(|| DEFAULT_STORE_URI.to_string()),
            database: cli
                .database
                .or(file.database)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: cli
                .collection
                .or(file.collection)
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
        }
    }
}

/// Platform config file location, e.g. `~/.config/knox-albums/config.toml`
/// on Linux.
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("knox-albums").join("config.toml"))
}

fn load_config_file(path: &PathBuf) -> Option<FileConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Ignoring unparseable config file {}: {}", path.display(), e);
            None
        }
    }
}
