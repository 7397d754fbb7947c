use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::{CommentText, Movie, MovieDraft, MovieId};
use crate::session::Token;
use crate::Result;

pub mod http;
pub use http::Client;

/// One method per remote operation. Bearer-authorized operations take the
/// token explicitly; the caller owns the token lifecycle.
#[async_trait]
pub trait Api: Send + Sync {
    /// `POST /users/login`. Returns the bearer token on success.
    async fn login(&self, email: &str, password: &str) -> Result<Token>;
    /// `POST /users/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<Registration>;
    /// `GET /users/details`. The token exchange backing the session store.
    async fn user_details(&self, token: &Token) -> Result<UserDetails>;
    /// `GET /movies/getMovies`.
    async fn movies(&self, token: &Token) -> Result<Vec<Movie>>;
    /// `GET /movies/getMovie/:id`.
    async fn movie(&self, token: &Token, id: &MovieId) -> Result<Movie>;
    /// `POST /movies/addMovie`.
    async fn add_movie(&self, token: &Token, draft: &MovieDraft) -> Result<Movie>;
    /// `PATCH /movies/updateMovie/:id`.
    async fn update_movie(&self, token: &Token, id: &MovieId, draft: &MovieDraft)
        -> Result<Movie>;
    /// `DELETE /movies/deleteMovie/:id`.
    async fn delete_movie(&self, token: &Token, id: &MovieId) -> Result<()>;
    /// `PATCH /movies/addComment/:id`.
    async fn add_comment(&self, token: &Token, id: &MovieId, text: &CommentText) -> Result<Movie>;
}

/// Identity and role of the authenticated user as returned by the details
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserDetails {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Successful registration outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub message: Option<String>,
}
