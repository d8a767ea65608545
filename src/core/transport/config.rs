//! Transport selection.
//!
//! The transport is chosen once at startup from `MCP_TRANSPORT`; unknown or
//! unset values fall back to the first compiled-in transport.

use serde::{Deserialize, Serialize};

#[cfg(any(feature = "tcp", feature = "http"))]
const DEFAULT_HOST: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(feature = "http")]
const DEFAULT_RPC_PATH: &str = "/mcp";

/// Which transport the server listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// JSON-RPC over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited JSON-RPC over TCP.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP listener settings.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Route that accepts JSON-RPC requests.
    pub rpc_path: String,

    /// Allow any origin (for browser-based clients).
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_TCP_PORT,
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// Socket address string to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Socket address string to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");

impl Default for TransportConfig {
    #[allow(unreachable_code)]
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        return Self::Stdio;

        #[cfg(feature = "tcp")]
        return Self::Tcp(TcpConfig::default());

        #[cfg(feature = "http")]
        return Self::Http(HttpConfig::default());
    }
}

impl TransportConfig {
    /// Read `MCP_TRANSPORT` and the matching `MCP_TCP_*` / `MCP_HTTP_*`
    /// variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let kind = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match kind.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => {
                let defaults = TcpConfig::default();
                Self::Tcp(TcpConfig {
                    host: lookup("MCP_TCP_HOST").unwrap_or(defaults.host),
                    port: parse_port(lookup("MCP_TCP_PORT"), defaults.port),
                })
            }
            #[cfg(feature = "http")]
            "http" => {
                let defaults = HttpConfig::default();
                Self::Http(HttpConfig {
                    host: lookup("MCP_HTTP_HOST").unwrap_or(defaults.host),
                    port: parse_port(lookup("MCP_HTTP_PORT"), defaults.port),
                    rpc_path: lookup("MCP_HTTP_PATH").unwrap_or(defaults.rpc_path),
                    enable_cors: lookup("MCP_HTTP_CORS")
                        .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0"))
                        .unwrap_or(defaults.enable_cors),
                })
            }
            _ => Self::default(),
        }
    }

    /// Human-readable summary for the startup log.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}", cfg.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}{}", cfg.address(), cfg.rpc_path),
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn parse_port(value: Option<String>, default: u16) -> u16 {
    value.and_then(|p| p.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unset_falls_back_to_stdio() {
        let config = TransportConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, TransportConfig::Stdio);

        let config = TransportConfig::from_lookup(lookup_from(&[("MCP_TRANSPORT", "carrier-pigeon")]));
        assert_eq!(config, TransportConfig::Stdio);
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_env() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            ("MCP_TRANSPORT", "TCP"),
            ("MCP_TCP_PORT", "4000"),
        ]));
        assert_eq!(
            config,
            TransportConfig::Tcp(TcpConfig {
                host: "127.0.0.1".to_string(),
                port: 4000,
            })
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_env() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            ("MCP_TRANSPORT", "http"),
            ("MCP_HTTP_HOST", "0.0.0.0"),
            ("MCP_HTTP_PORT", "not-a-port"),
            ("MCP_HTTP_CORS", "false"),
        ]));
        let TransportConfig::Http(http) = config else {
            panic!("expected HTTP transport");
        };
        assert_eq!(http.address(), "0.0.0.0:8080");
        assert_eq!(http.rpc_path, "/mcp");
        assert!(!http.enable_cors);
    }
}
