use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl From<&str> for GatewayPublisherVia {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "memory" => GatewayPublisherVia::Memory,
            _ => GatewayPublisherVia::Logs,
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
