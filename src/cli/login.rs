use clap::Args;

use crate::cli::Context;
use crate::client::Api;
use crate::guard::{self, Page};
use crate::session::Session;
use crate::Result;

/// Log in against the remote service.
#[derive(Args, Debug)]
pub struct LoginCommand {
    /// Account email
    #[arg(long, env = "MVCAT_EMAIL")]
    email: String,
    /// Account password
    #[arg(long, env = "MVCAT_PASSWORD")]
    password: String,
}

impl LoginCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let session = ctx.store.initialize(&ctx.api).await;
        if let Some(to) = guard::redirect(Page::Login, &session) {
            println!("Already logged in, redirecting to {}", to.path());
            return Ok(());
        }

        // On a credential failure this propagates before any token is
        // persisted and the session stays absent.
        let token = ctx.api.login(&self.email, &self.password).await?;

        // Persist first: a populated session implies a stored token.
        ctx.store.persist_token(&token).await?;

        let details = ctx.api.user_details(&token).await?;
        ctx.store.set(Session::from(details)).await;

        println!("You are now logged in!");
        Ok(())
    }
}
