//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TALON_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// File name of the embedding cache snapshot inside [`Config::data_dir`].
pub const CACHE_SNAPSHOT_FILENAME: &str = "embedding_cache.rkyv";

/// File name of the corpus snapshot inside [`Config::data_dir`].
pub const CORPUS_SNAPSHOT_FILENAME: &str = "corpus.rkyv";

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TALON_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory for snapshot storage. Default: `./.data`.
    pub data_dir: PathBuf,

    /// Path to the raw candidate profiles JSON file. Default: `./talent_profiles.json`.
    pub profiles_path: PathBuf,

    /// Completion model name. Default: `gemini-2.0-flash`.
    pub chat_model: String,

    /// Embedding model name. Default: `text-embedding-004`.
    pub embed_model: String,

    /// Per-call provider timeout in seconds. Default: `30`.
    pub provider_timeout_secs: u64,

    /// Embedding dimensionality `D`. Default: `768`.
    pub embedding_dim: usize,

    /// Default number of candidates returned by ranking requests. Default: `10`.
    pub recommend_top_k: usize,

    /// Number of candidates retrieved for a chat turn. Default: `5`.
    pub chat_top_k: usize,

    /// Maximum retained turns per conversation session. Default: `32`.
    pub max_session_turns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            data_dir: PathBuf::from("./.data"),
            profiles_path: PathBuf::from("./talent_profiles.json"),
            chat_model: "gemini-2.0-flash".to_string(),
            embed_model: "text-embedding-004".to_string(),
            provider_timeout_secs: 30,
            embedding_dim: 768,
            recommend_top_k: 10,
            chat_top_k: 5,
            max_session_turns: 32,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TALON_PORT";
    const ENV_BIND_ADDR: &'static str = "TALON_BIND_ADDR";
    const ENV_DATA_DIR: &'static str = "TALON_DATA_DIR";
    const ENV_PROFILES_PATH: &'static str = "TALON_PROFILES_PATH";
    const ENV_CHAT_MODEL: &'static str = "TALON_CHAT_MODEL";
    const ENV_EMBED_MODEL: &'static str = "TALON_EMBED_MODEL";
    const ENV_PROVIDER_TIMEOUT_SECS: &'static str = "TALON_PROVIDER_TIMEOUT_SECS";
    const ENV_EMBEDDING_DIM: &'static str = "TALON_EMBEDDING_DIM";
    const ENV_RECOMMEND_TOP_K: &'static str = "TALON_RECOMMEND_TOP_K";
    const ENV_CHAT_TOP_K: &'static str = "TALON_CHAT_TOP_K";
    const ENV_MAX_SESSION_TURNS: &'static str = "TALON_MAX_SESSION_TURNS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let data_dir = Self::parse_path_from_env(Self::ENV_DATA_DIR, defaults.data_dir);
        let profiles_path =
            Self::parse_path_from_env(Self::ENV_PROFILES_PATH, defaults.profiles_path);
        let chat_model = Self::parse_string_from_env(Self::ENV_CHAT_MODEL, defaults.chat_model);
        let embed_model = Self::parse_string_from_env(Self::ENV_EMBED_MODEL, defaults.embed_model);
        let provider_timeout_secs = Self::parse_usize_from_env(
            Self::ENV_PROVIDER_TIMEOUT_SECS,
            defaults.provider_timeout_secs as usize,
        ) as u64;
        let embedding_dim =
            Self::parse_usize_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim);
        let recommend_top_k =
            Self::parse_usize_from_env(Self::ENV_RECOMMEND_TOP_K, defaults.recommend_top_k);
        let chat_top_k = Self::parse_usize_from_env(Self::ENV_CHAT_TOP_K, defaults.chat_top_k);
        let max_session_turns =
            Self::parse_usize_from_env(Self::ENV_MAX_SESSION_TURNS, defaults.max_session_turns);

        Ok(Self {
            port,
            bind_addr,
            data_dir,
            profiles_path,
            chat_model,
            embed_model,
            provider_timeout_secs,
            embedding_dim,
            recommend_top_k,
            chat_top_k,
            max_session_turns,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.data_dir.clone(),
            });
        }

        if self.profiles_path.exists() && !self.profiles_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.profiles_path.clone(),
            });
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::InvalidEmbeddingDim);
        }

        if self.recommend_top_k == 0 || self.chat_top_k == 0 {
            return Err(ConfigError::InvalidTopK);
        }

        if self.provider_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Path of the embedding cache snapshot.
    pub fn cache_snapshot_path(&self) -> PathBuf {
        self.data_dir.join(CACHE_SNAPSHOT_FILENAME)
    }

    /// Path of the corpus snapshot.
    pub fn corpus_snapshot_path(&self) -> PathBuf {
        self.data_dir.join(CORPUS_SNAPSHOT_FILENAME)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
