use mcp_common::serve::Transport;

use crate::error::AppError;
use crate::recommend::FocusPolicy;

const DEFAULT_HTTP_PATH: &str = "/mcp";

/// Application configuration loaded explicitly from environment variables.
///
/// All content is compiled in; configuration only picks the transport and the
/// focus-area policy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Serve one MCP session per TCP connection on this address.
    pub tcp_listen_addr: Option<String>,
    /// Serve MCP over streamable HTTP on this address.
    pub http_listen_addr: Option<String>,
    /// Mount path for the HTTP transport.
    pub http_path: String,
    /// Collapse repeated focus areas before generating recommendations.
    pub dedupe_focus_areas: bool,
}

impl Config {
    /// Optional:
    /// - `MCP_TCP_LISTEN_ADDR`: raw TCP listen address
    /// - `MCP_HTTP_LISTEN_ADDR`: streamable HTTP listen address
    /// - `MCP_HTTP_PATH`: HTTP mount path (default: "/mcp")
    /// - `PM_STANDARDS_DEDUPE_FOCUS`: "true"/"false" (default: true)
    ///
    /// With no listen address set the server runs on stdio.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let tcp_listen_addr = var("MCP_TCP_LISTEN_ADDR");
        let http_listen_addr = var("MCP_HTTP_LISTEN_ADDR");
        if tcp_listen_addr.is_some() && http_listen_addr.is_some() {
            return Err(AppError::Config(
                "MCP_TCP_LISTEN_ADDR and MCP_HTTP_LISTEN_ADDR are mutually exclusive".to_string(),
            ));
        }

        let http_path = var("MCP_HTTP_PATH").unwrap_or_else(|| DEFAULT_HTTP_PATH.to_string());
        if !http_path.starts_with('/') || http_path == "/" {
            return Err(AppError::Config(format!(
                "MCP_HTTP_PATH must be a non-root path starting with '/', got '{http_path}'"
            )));
        }

        let dedupe_focus_areas = match var("PM_STANDARDS_DEDUPE_FOCUS") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "PM_STANDARDS_DEDUPE_FOCUS must be true or false, got '{raw}'"
                ))
            })?,
        };

        Ok(Self {
            tcp_listen_addr,
            http_listen_addr,
            http_path,
            dedupe_focus_areas,
        })
    }

    pub fn transport(&self) -> Transport {
        match (&self.tcp_listen_addr, &self.http_listen_addr) {
            (Some(addr), _) => Transport::Tcp { addr: addr.clone() },
            (None, Some(addr)) => Transport::Http {
                addr: addr.clone(),
                path: self.http_path.clone(),
            },
            (None, None) => Transport::Stdio,
        }
    }

    pub fn focus_policy(&self) -> FocusPolicy {
        if self.dedupe_focus_areas {
            FocusPolicy::Dedupe
        } else {
            FocusPolicy::KeepRepeats
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_stdio_and_dedupe() {
        let config = config(&[]).unwrap();
        assert_eq!(config.transport(), Transport::Stdio);
        assert_eq!(config.focus_policy(), FocusPolicy::Dedupe);
        assert_eq!(config.http_path, "/mcp");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("MCP_TCP_LISTEN_ADDR", "  ")]).unwrap();
        assert_eq!(config.transport(), Transport::Stdio);
    }

    #[test]
    fn selects_tcp_or_http() {
        let tcp = config(&[("MCP_TCP_LISTEN_ADDR", "127.0.0.1:7000")]).unwrap();
        assert_eq!(
            tcp.transport(),
            Transport::Tcp {
                addr: "127.0.0.1:7000".to_string()
            }
        );

        let http = config(&[
            ("MCP_HTTP_LISTEN_ADDR", "0.0.0.0:8080"),
            ("MCP_HTTP_PATH", "/standards"),
        ])
        .unwrap();
        assert_eq!(
            http.transport(),
            Transport::Http {
                addr: "0.0.0.0:8080".to_string(),
                path: "/standards".to_string()
            }
        );
    }

    #[test]
    fn rejects_both_listen_addresses() {
        let err = config(&[
            ("MCP_TCP_LISTEN_ADDR", "127.0.0.1:7000"),
            ("MCP_HTTP_LISTEN_ADDR", "127.0.0.1:8080"),
        ])
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn rejects_root_http_path() {
        assert!(config(&[("MCP_HTTP_PATH", "/")]).is_err());
        assert!(config(&[("MCP_HTTP_PATH", "mcp")]).is_err());
    }

    #[test]
    fn focus_policy_switch() {
        let legacy = config(&[("PM_STANDARDS_DEDUPE_FOCUS", "False")]).unwrap();
        assert_eq!(legacy.focus_policy(), FocusPolicy::KeepRepeats);
        assert!(config(&[("PM_STANDARDS_DEDUPE_FOCUS", "maybe")]).is_err());
    }
}
