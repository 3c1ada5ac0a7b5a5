use std::net::SocketAddr;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment};
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

const ENV_PREFIX: &str = "BOOKSTORE";

const DEFAULT_SERVER_NAME: &str = "bookstore";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:50051";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:50051";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

// Configuration abstracts config options for the bookstore service and its demo client.
// Each field can be overridden by BOOKSTORE_<FIELD>, e.g. BOOKSTORE_LISTEN_ADDR.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub server_name: String,
    pub listen_addr: String,
    pub server_url: String,
    pub log_format: LogFormat,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_SERVER_NAME)
    }
}

impl Configuration {
    pub fn new(server_name: &str) -> Self {
        Configuration {
            server_name: server_name.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            log_format: LogFormat::Json,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Config::builder().add_source(Environment::with_prefix(ENV_PREFIX)))
    }

    pub(crate) fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut config: Configuration = builder.build()?.try_deserialize()?;
        config.server_url = config.server_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.listen_addr.parse::<SocketAddr>()
            .map_err(|err| format!("invalid listen address {:?}: {}", self.listen_addr, err))
    }
}
