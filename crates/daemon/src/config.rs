//! Daemon configuration

use std::env;

use anyhow::{Context, Result};
use qms_api_rpc::server::{DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};

const DEFAULT_DB_PATH: &str = "~/.qms/queues.db";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Daemon configuration loaded from environment
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// SQLite database URL or path
    pub db_path: String,
    /// RPC bind host
    pub rpc_host: String,
    /// RPC bind port
    pub rpc_port: u16,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    /// Load configuration from environment variables (after `.env`, if present)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = lookup("QMS_DB_PATH")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let rpc_port = match lookup("QMS_RPC_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("QMS_RPC_PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_RPC_PORT,
        };

        let log_format = match lookup("QMS_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            db_path: shellexpand::tilde(&db_path).into_owned(),
            rpc_host: lookup("QMS_RPC_HOST").unwrap_or_else(|| DEFAULT_RPC_HOST.to_string()),
            rpc_port,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DaemonConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DaemonConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.db_path.ends_with(".qms/queues.db"));
        assert_eq!(config.rpc_host, DEFAULT_RPC_HOST);
        assert_eq!(config.rpc_port, DEFAULT_RPC_PORT);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_db_path_falls_back_to_database_url() {
        let config = load(&[("DATABASE_URL", "sqlite:///var/lib/qms.db")]).unwrap();
        assert_eq!(config.db_path, "sqlite:///var/lib/qms.db");

        let config = load(&[
            ("DATABASE_URL", "sqlite:///var/lib/qms.db"),
            ("QMS_DB_PATH", "/tmp/qms.db"),
        ])
        .unwrap();
        assert_eq!(config.db_path, "/tmp/qms.db");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = load(&[("QMS_RPC_PORT", "ninety")]).unwrap_err();
        assert!(err.to_string().contains("QMS_RPC_PORT"));
    }

    #[test]
    fn test_json_log_format() {
        let config = load(&[("QMS_LOG_FORMAT", "json"), ("QMS_RPC_PORT", "0")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.rpc_port, 0);
    }
}
