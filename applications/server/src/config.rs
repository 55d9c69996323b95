/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Bare environment variable that overrides the listening port
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence, lowest first: built-in defaults, the config file
    /// (`config.toml` unless `path` is given), `ROSTER_*` variables, `PORT`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`ServerConfig::load`], reading variables from `env` instead
    /// of the process environment when given
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ServerError::Config(format!(
                        "Config file not found at {:?}",
                        path
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        let port = match &env {
            Some(vars) => vars.get(PORT_ENV).cloned(),
            None => std::env::var(PORT_ENV).ok(),
        };

        // Override with environment variables (prefixed with ROSTER_)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("_")
                .try_parsing(true)
                .source(env),
        );

        settings = settings
            .set_override_option("server.port", port)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Self::from_builder(settings)
    }

    /// Apply a port given on the command line, which beats every other source
    #[must_use]
    pub fn with_port_override(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    fn from_builder(
        settings: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set PORT or ROSTER_SERVER_PORT)".to_string(),
            ));
        }

        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Host {:?} is not an IP address",
                self.server.host
            )));
        }

        Ok(())
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
        }
    }
}
