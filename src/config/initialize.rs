use std::path::{Path, PathBuf};

use tokio::fs;

use crate::client::Client;
use crate::common::{debug, Error, ErrorKind};
use crate::config::Config;
use crate::session::{SessionStore, TokenStore};
use crate::Result;

/// Merges the optional config file with command line overrides and builds
/// the pieces every command needs. Command line values win.
#[derive(Debug)]
pub struct Initializer {
    config: Config,
}

impl Initializer {
    pub async fn load_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).await?;
        let config = serde_yaml::from_str::<Config>(&raw).map_err(Error::from)?;

        Ok(Self { config })
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn set_base_url(&mut self, base_url: Option<String>) {
        if base_url.is_some() {
            self.config.api.base_url = base_url;
        }
    }

    pub fn set_token_path(&mut self, token_path: Option<PathBuf>) {
        if token_path.is_some() {
            self.config.session.token_path = token_path;
        }
    }

    pub fn build(self) -> Result<(Client, SessionStore)> {
        let base_url = self.config.api.base_url.ok_or_else(|| {
            Error::from(ErrorKind::MissingConfig {
                name: "base url",
                hint: "set MVCAT_BASE_URL or pass --base-url",
            })
        })?;

        let token_path = self
            .config
            .session
            .token_path
            .unwrap_or_else(TokenStore::default_path);
        debug!("Token path {}", token_path.display());

        let client = Client::from_base_url(base_url)?;
        let store = SessionStore::new(TokenStore::new(token_path));

        Ok((client, store))
    }
}
