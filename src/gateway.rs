use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryError;

pub mod events;
pub mod factory;
pub mod logs {
    pub mod publisher;
}
pub mod memory {
    pub mod publisher;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl FromStr for GatewayPublisherVia {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "logs" => Ok(GatewayPublisherVia::Logs),
            "memory" => Ok(GatewayPublisherVia::Memory),
            other => Err(LibraryError::validation(
                format!("unknown event publisher {}", other).as_str(), Some("CATALOG_EVENTS".to_string()))),
        }
    }
}

impl Display for GatewayPublisherVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            GatewayPublisherVia::Logs => write!(f, "logs"),
            GatewayPublisherVia::Memory => write!(f, "memory"),
        }
    }
}
