//! Server configuration loaded via OrthoConfig.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener and startup seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Interface to bind, e.g. `127.0.0.1`.
    pub host: Option<String>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// Install the fixture users at startup.
    #[ortho_config(default = true)]
    pub seed: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address the server will bind to.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        format!("{}:{}", self.host(), self.port())
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("ROSTER_HOST", None::<String>),
            ("ROSTER_PORT", None::<String>),
            ("ROSTER_SEED", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert!(settings.seed);
        assert_eq!(
            settings.bind_addr().expect("valid address").port(),
            DEFAULT_PORT
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ROSTER_HOST", Some("127.0.0.1")),
            ("ROSTER_PORT", Some("9090")),
            ("ROSTER_SEED", Some("false")),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        assert!(!settings.seed);
    }
}
