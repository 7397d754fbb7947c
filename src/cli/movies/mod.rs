mod add;
mod comment;
mod delete;
mod edit;
mod list;
mod show;

use clap::Subcommand;

use crate::catalog::Movie;
use crate::cli::Context;
use crate::client::Api;
use crate::session::Token;
use crate::Result;

/// Movie catalog operations
#[derive(Subcommand, Debug)]
pub enum MoviesCommand {
    /// List the movie catalog
    List(list::ListCommand),
    /// Show one movie with its comments
    Show(show::ShowCommand),
    /// Add a movie (administrators)
    Add(add::AddCommand),
    /// Edit a movie (administrators)
    Edit(edit::EditCommand),
    /// Delete a movie (administrators)
    Delete(delete::DeleteCommand),
    /// Comment on a movie
    Comment(comment::CommentCommand),
}

impl MoviesCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            MoviesCommand::List(c) => c.run(ctx).await,
            MoviesCommand::Show(c) => c.run(ctx).await,
            MoviesCommand::Add(c) => c.run(ctx).await,
            MoviesCommand::Edit(c) => c.run(ctx).await,
            MoviesCommand::Delete(c) => c.run(ctx).await,
            MoviesCommand::Comment(c) => c.run(ctx).await,
        }
    }
}

pub(super) fn render_list(movies: &[Movie]) {
    println!("{} movie(s)", movies.len());
    for movie in movies {
        let year = movie
            .year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "N/A".to_owned());
        println!(
            "  {}  {} ({})  {}",
            movie.id,
            movie.title,
            year,
            movie.genre.as_deref().unwrap_or("Unknown Genre"),
        );
    }
}

pub(super) fn render_movie(movie: &Movie) {
    println!("{}", movie.title);
    println!(
        "  Description: {}",
        movie
            .description
            .as_deref()
            .unwrap_or("No description available")
    );
    println!("  Genre:       {}", movie.genre.as_deref().unwrap_or("N/A"));
    println!(
        "  Director:    {}",
        movie.director.as_deref().unwrap_or("N/A")
    );
    match movie.year {
        Some(year) => println!("  Year:        {}", year),
        None => println!("  Year:        N/A"),
    }
    if let Some(poster) = movie.poster.as_deref() {
        println!("  Poster:      {}", poster);
    }
    render_comments(movie);
}

pub(super) fn render_comments(movie: &Movie) {
    println!("Comments");
    if movie.comments.is_empty() {
        println!("  No comments found for this movie.");
        return;
    }
    for comment in &movie.comments {
        println!(
            "  {}: {}",
            comment.user_id.as_deref().unwrap_or("unknown"),
            comment.text.as_deref().unwrap_or("No comment text"),
        );
    }
}

// Mutating commands re-fetch and render the list so the caller sees the
// catalog with the mutation applied.
pub(super) async fn refresh_list(ctx: &Context, token: &Token) -> Result<()> {
    let movies = ctx.api.movies(token).await?;
    render_list(&movies);
    Ok(())
}
