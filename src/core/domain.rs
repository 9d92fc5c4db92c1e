use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// RuntimeMode selects how the catalog binary serves requests
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RuntimeMode {
    Local,
    Lambda,
}

impl FromStr for RuntimeMode {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(RuntimeMode::Local),
            "lambda" => Ok(RuntimeMode::Lambda),
            other => Err(LibraryError::validation(
                format!("unknown runtime mode {}", other).as_str(), Some("CATALOG_RUNTIME".to_string()))),
        }
    }
}

impl Display for RuntimeMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RuntimeMode::Local => write!(f, "local"),
            RuntimeMode::Lambda => write!(f, "lambda"),
        }
    }
}

// IdStrategy decides the identifier given to a newly created book.
// CatalogSize assigns the current number of books + 1, so ids can repeat after deletes.
// Monotonic assigns one more than the highest id ever handed out.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum IdStrategy {
    CatalogSize,
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog-size" | "size" => Ok(IdStrategy::CatalogSize),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => Err(LibraryError::validation(
                format!("unknown id strategy {}", other).as_str(), Some("CATALOG_ID_STRATEGY".to_string()))),
        }
    }
}

impl Display for IdStrategy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            IdStrategy::CatalogSize => write!(f, "catalog-size"),
            IdStrategy::Monotonic => write!(f, "monotonic"),
        }
    }
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub environment: String,
    pub runtime: RuntimeMode,
    pub bind_address: String,
    pub id_strategy: IdStrategy,
    pub seed_catalog: bool,
    pub events: GatewayPublisherVia,
    pub log_level: String,
}

impl Configuration {
    pub fn new(environment: &str) -> Self {
        Configuration {
            environment: environment.to_string(),
            runtime: RuntimeMode::Local,
            bind_address: "0.0.0.0:8080".to_string(),
            id_strategy: IdStrategy::CatalogSize,
            seed_catalog: true,
            events: GatewayPublisherVia::Logs,
            log_level: "info".to_string(),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("CATALOG_ENV").as_deref().unwrap_or("dev"));
        if let Some(runtime) = lookup("CATALOG_RUNTIME") {
            config.runtime = runtime.parse()?;
        }
        if let Some(addr) = lookup("CATALOG_BIND_ADDR") {
            config.bind_address = addr;
        }
        if let Some(strategy) = lookup("CATALOG_ID_STRATEGY") {
            config.id_strategy = strategy.parse()?;
        }
        if let Some(seed) = lookup("CATALOG_SEED") {
            config.seed_catalog = parse_flag("CATALOG_SEED", seed.as_str())?;
        }
        if let Some(events) = lookup("CATALOG_EVENTS") {
            config.events = events.parse()?;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            parse_log_level(level.as_str())?;
            config.log_level = level;
        }
        Ok(config)
    }
}

/// Accepts the tracing level names, case-insensitively.
pub fn parse_log_level(value: &str) -> LibraryResult<tracing::Level> {
    tracing::Level::from_str(value.trim()).map_err(|_| LibraryError::validation(
        format!("invalid log level {}", value).as_str(), Some("CATALOG_LOG_LEVEL".to_string())))
}

fn parse_flag(name: &str, value: &str) -> LibraryResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(LibraryError::validation(
            format!("invalid boolean {} for {}", other, name).as_str(), Some(name.to_string()))),
    }
}
