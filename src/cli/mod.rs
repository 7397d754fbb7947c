mod root;
pub use root::{parse, ClientOptions, Command, MvcatCommand};

pub mod login;
pub mod logout;
pub mod movies;
pub mod register;
pub mod status;

use crate::client::Client;
use crate::config::{Config, Initializer};
use crate::guard::{self, Page};
use crate::session::{Session, SessionStore, Token};
use crate::{MvcatError, Result};

/// Pieces shared by every command.
pub struct Context {
    pub api: Client,
    pub store: SessionStore,
}

/// Build the execution context from the global client options.
pub async fn context(options: ClientOptions) -> Result<Context> {
    let ClientOptions {
        base_url,
        token_path,
        config,
    } = options;

    let mut initializer = match config {
        Some(path) => Initializer::load_config_file(path).await?,
        None => Initializer::from_config(Config::default()),
    };

    initializer.set_base_url(base_url);
    initializer.set_token_path(token_path);

    let (api, store) = initializer.build()?;
    Ok(Context { api, store })
}

// Evaluate the route guard for a screen that requires a session. Reports
// where the redirect lands and refuses the operation instead of navigating.
pub(crate) async fn require_page(ctx: &Context, page: Page) -> Result<(Session, Token)> {
    let session = ctx.store.initialize(&ctx.api).await;

    if let Some(to) = guard::redirect(page, &session) {
        println!("Redirecting to {}", to.path());
        return Err(match to {
            Page::Login => MvcatError::Unauthenticated,
            _ => MvcatError::Forbidden,
        });
    }

    let token = ctx.store.token().await?.ok_or(MvcatError::Unauthenticated)?;
    Ok((session, token))
}
