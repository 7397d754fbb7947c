use clap::Args;

use crate::cli::Context;
use crate::guard;
use crate::Result;

/// Show the current session and navigation links.
#[derive(Args, Debug)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let session = ctx.store.initialize(&ctx.api).await;

        match &session.id {
            Some(id) => {
                let who = session.email.as_deref().unwrap_or(id.as_str());
                if session.admin() {
                    println!("Logged in as {} [admin]", who);
                } else {
                    println!("Logged in as {}", who);
                }
            }
            None => println!("Not logged in"),
        }

        for link in guard::nav_links(&session) {
            println!("  {:<10} {}", link.label, link.page.path());
        }

        Ok(())
    }
}
