use clap::Args;

use crate::cli::Context;
use crate::guard::Page;
use crate::Result;

/// Clear the session and the persisted token, regardless of prior state.
#[derive(Args, Debug)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        ctx.store.clear().await?;
        println!("Logged out, redirecting to {}", Page::Login.path());
        Ok(())
    }
}
