//! Host configuration from the process environment.

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `PORT` is set but not a port.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_port(std::env::var("PORT").ok().as_deref())
    }

    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `port` is not a valid port.
    pub fn from_port(port: Option<&str>) -> Result<Self, HostError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| HostError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

/// Backend the hydrated bundle calls. It is fixed when the crates are
/// compiled, so the host's runtime environment cannot change it.
pub fn bundle_api_base_url() -> String {
    gateway::GatewayConfig::from_build_env().base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(HostConfig::from_port(None).expect("config").port, 3000);
    }

    #[test]
    fn blank_port_falls_back_to_default() {
        assert_eq!(HostConfig::from_port(Some("  ")).expect("config").port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_trimmed() {
        assert_eq!(HostConfig::from_port(Some(" 8081 ")).expect("config").port, 8081);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = HostConfig::from_port(Some("eighty")).unwrap_err();
        assert_eq!(err.to_string(), "invalid PORT: eighty");
        assert!(HostConfig::from_port(Some("70000")).is_err());
    }

    #[test]
    fn bundle_url_has_no_trailing_slash() {
        assert!(!bundle_api_base_url().ends_with('/'));
    }
}
