use clap::Args;

use crate::catalog::{CommentText, MovieId};
use crate::cli::{require_page, Context};
use crate::client::Api;
use crate::guard::Page;
use crate::Result;

/// Append a comment to a movie.
#[derive(Args, Debug)]
pub struct CommentCommand {
    /// Movie identifier
    #[arg(value_name = "ID")]
    id: String,
    /// Comment text
    #[arg(value_name = "TEXT")]
    text: String,
}

impl CommentCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let (_session, token) = require_page(ctx, Page::MovieDetails).await?;

        let text = CommentText::new(self.text)?;
        let id = MovieId::new(self.id);

        ctx.api.add_comment(&token, &id, &text).await?;

        // Full re-fetch instead of trusting the patch response body.
        let movie = ctx.api.movie(&token, &id).await?;
        super::render_comments(&movie);
        Ok(())
    }
}
