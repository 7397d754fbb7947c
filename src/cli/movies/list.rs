use clap::Args;

use crate::cli::{require_page, Context};
use crate::client::Api;
use crate::common::debug;
use crate::guard::Page;
use crate::Result;

/// Browse the movie catalog.
#[derive(Args, Debug)]
pub struct ListCommand {}

impl ListCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let (_session, token) = require_page(ctx, Page::Catalog).await?;

        debug!("Loading movies");
        let movies = ctx.api.movies(&token).await?;

        super::render_list(&movies);
        Ok(())
    }
}
