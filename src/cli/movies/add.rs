use clap::Args;

use crate::catalog::{MovieDraft, Year};
use crate::cli::{require_page, Context};
use crate::client::Api;
use crate::guard::Page;
use crate::Result;

/// Add a movie to the catalog. Administrators only.
#[derive(Args, Debug)]
pub struct AddCommand {
    /// Movie title
    #[arg(long)]
    title: String,
    /// Director name
    #[arg(long)]
    director: String,
    /// Release year
    #[arg(long)]
    year: i32,
    /// Movie description
    #[arg(long)]
    description: String,
    /// Genre
    #[arg(long)]
    genre: String,
    /// Poster image url
    #[arg(long)]
    poster: String,
}

impl AddCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let (_session, token) = require_page(ctx, Page::AdminDashboard).await?;

        let draft = MovieDraft::new(
            self.title,
            self.director,
            Year::new(self.year)?,
            self.description,
            self.genre,
            self.poster,
        )?;

        let created = ctx.api.add_movie(&token, &draft).await?;
        println!("Movie added successfully! ({})", created.id);

        super::refresh_list(ctx, &token).await
    }
}
