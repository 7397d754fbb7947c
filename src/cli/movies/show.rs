use clap::Args;

use crate::catalog::MovieId;
use crate::cli::{require_page, Context};
use crate::client::Api;
use crate::guard::Page;
use crate::Result;

/// Show one movie with its comments.
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Movie identifier
    #[arg(value_name = "ID")]
    id: String,
}

impl ShowCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let (_session, token) = require_page(ctx, Page::MovieDetails).await?;

        let movie = ctx.api.movie(&token, &MovieId::new(self.id)).await?;

        super::render_movie(&movie);
        Ok(())
    }
}
