use clap::Args;

use crate::catalog::{MovieDraft, MovieId, Year};
use crate::cli::{require_page, Context};
use crate::client::Api;
use crate::error::CatalogError;
use crate::guard::Page;
use crate::Result;

/// Edit a movie. Administrators only. Omitted fields keep their current
/// value.
#[derive(Args, Debug)]
pub struct EditCommand {
    /// Movie identifier
    #[arg(value_name = "ID")]
    id: String,
    /// Movie title
    #[arg(long)]
    title: Option<String>,
    /// Director name
    #[arg(long)]
    director: Option<String>,
    /// Release year
    #[arg(long)]
    year: Option<i32>,
    /// Movie description
    #[arg(long)]
    description: Option<String>,
    /// Genre
    #[arg(long)]
    genre: Option<String>,
    /// Poster image url
    #[arg(long)]
    poster: Option<String>,
}

impl EditCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let (_session, token) = require_page(ctx, Page::AdminDashboard).await?;

        let id = MovieId::new(self.id);

        // Pre-fill from the current record, then overlay the provided flags.
        // The update endpoint expects the full draft.
        let current = ctx.api.movie(&token, &id).await?;

        let year = self
            .year
            .or(current.year)
            .ok_or(CatalogError::EmptyField { field: "year" })?;

        let draft = MovieDraft::new(
            self.title.unwrap_or(current.title),
            self.director.or(current.director).unwrap_or_default(),
            Year::new(year)?,
            self.description.or(current.description).unwrap_or_default(),
            self.genre.or(current.genre).unwrap_or_default(),
            self.poster.or(current.poster).unwrap_or_default(),
        )?;

        ctx.api.update_movie(&token, &id, &draft).await?;
        println!("Movie updated successfully!");

        super::refresh_list(ctx, &token).await
    }
}
