use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// ServeMode selects how the router is exposed
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum ServeMode {
    Http,
    Lambda,
}

impl From<&str> for ServeMode {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "lambda" => ServeMode::Lambda,
            _ => ServeMode::Http,
        }
    }
}

impl Display for ServeMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ServeMode::Http => write!(f, "http"),
            ServeMode::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub log_level: String,
    pub serve_mode: ServeMode,
    pub event_publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "public".to_string(),
            log_level: "info".to_string(),
            serve_mode: ServeMode::Http,
            event_publisher: GatewayPublisherVia::Logs,
        }
    }

    /// Builds configuration from `BOOKSHELF_*` environment variables, falling back
    /// to the defaults of [`Configuration::new`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let branch = lookup("BOOKSHELF_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(host) = lookup("BOOKSHELF_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("BOOKSHELF_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => tracing::warn!("ignoring BOOKSHELF_PORT {:?}: {}", port, err),
            }
        }
        if let Some(dir) = lookup("BOOKSHELF_STATIC_DIR") {
            config.static_dir = dir;
        }
        if let Some(level) = lookup("BOOKSHELF_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(mode) = lookup("BOOKSHELF_SERVE_MODE") {
            config.serve_mode = ServeMode::from(mode.as_str());
        }
        if let Some(via) = lookup("BOOKSHELF_EVENTS") {
            config.event_publisher = GatewayPublisherVia::from(via.as_str());
        }
        config
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, ServeMode};
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(3000, config.port);
        assert_eq!("public", config.static_dir.as_str());
        assert_eq!(ServeMode::Http, config.serve_mode);
        assert_eq!(GatewayPublisherVia::Logs, config.event_publisher);
        assert_eq!("0.0.0.0:3000", config.socket_addr());
    }

    #[tokio::test]
    async fn test_should_override_config_from_lookup() {
        let vars = HashMap::from([
            ("BOOKSHELF_BRANCH", "downtown"),
            ("BOOKSHELF_HOST", "127.0.0.1"),
            ("BOOKSHELF_PORT", "8080"),
            ("BOOKSHELF_STATIC_DIR", "site"),
            ("BOOKSHELF_LOG_LEVEL", "debug"),
            ("BOOKSHELF_SERVE_MODE", "Lambda"),
            ("BOOKSHELF_EVENTS", "memory"),
        ]);
        let config = Configuration::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!("downtown", config.branch_id.as_str());
        assert_eq!("127.0.0.1:8080", config.socket_addr());
        assert_eq!("site", config.static_dir.as_str());
        assert_eq!("debug", config.log_level.as_str());
        assert_eq!(ServeMode::Lambda, config.serve_mode);
        assert_eq!(GatewayPublisherVia::Memory, config.event_publisher);
    }

    #[tokio::test]
    async fn test_should_ignore_invalid_port() {
        let config = Configuration::from_lookup(|key| match key {
            "BOOKSHELF_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!("dev", config.branch_id.as_str());
        assert_eq!(3000, config.port);
    }
}
