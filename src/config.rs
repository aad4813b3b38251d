//! Configuration management for the Phonebook MCP Server.
//!
//! Configuration comes from environment variables, optionally populated from
//! a `.env` file. Nothing here prints to stdout, which MCP uses for
//! communication.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::{IdGenerator, SequentialIdGenerator, UuidGenerator};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How the store generates contact ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Random UUID v4 ids
    #[default]
    Uuid,

    /// `id-1`, `id-2`, ... in insertion order
    Sequential,
}

impl IdStrategy {
    /// Build the id generator for this strategy.
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            Self::Uuid => Box::new(UuidGenerator),
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!("Must be one of: uuid, sequential, got: {}", other)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid => write!(f, "uuid"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

/// Configuration for the Phonebook MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file of `{name, number}` entries added at startup (optional)
    pub seed_file: Option<PathBuf>,

    /// Contact id generation strategy (default: uuid)
    pub id_strategy: IdStrategy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_SEED_FILE`: Path to a JSON seed file
    /// - `PHONEBOOK_ID_STRATEGY`: `uuid` or `sequential` (default: uuid)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let seed_file = match env::var("PHONEBOOK_SEED_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PHONEBOOK_SEED_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => None,
        };

        let id_strategy = match env::var("PHONEBOOK_ID_STRATEGY") {
            Ok(val) => val
                .parse::<IdStrategy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "PHONEBOOK_ID_STRATEGY".to_string(),
                    reason,
                })?,
            Err(_) => IdStrategy::default(),
        };

        Ok(Config {
            seed_file,
            id_strategy,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_file: None,
            id_strategy: IdStrategy::Uuid,
        }
    }
}
