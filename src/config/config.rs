use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Deserialize, Debug, Default)]
pub struct ApiConfig {
    /// Base url of the remote catalog service.
    pub base_url: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SessionConfig {
    /// Where the bearer token is persisted across invocations.
    pub token_path: Option<PathBuf>,
}
