use clap::Args;

use crate::catalog::MovieId;
use crate::cli::{require_page, Context};
use crate::client::Api;
use crate::guard::Page;
use crate::Result;

/// Delete a movie from the catalog. Administrators only.
#[derive(Args, Debug)]
pub struct DeleteCommand {
    /// Movie identifier
    #[arg(value_name = "ID")]
    id: String,
}

impl DeleteCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let (_session, token) = require_page(ctx, Page::AdminDashboard).await?;

        let id = MovieId::new(self.id);
        ctx.api.delete_movie(&token, &id).await?;
        println!("Movie deleted successfully!");

        super::refresh_list(ctx, &token).await
    }
}
