use async_trait::async_trait;
use serde_json::{json, Value};

use crate::catalog::{self, CommentText, Movie, MovieDraft, MovieId};
use crate::client::{Api, Registration, RegisterRequest, UserDetails};
use crate::common::{self, debug, Error, ErrorKind};
use crate::session::Token;
use crate::{MvcatError, Result};

/// HTTP implementation of [`Api`] against the remote catalog service.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let http = reqwest::Client::builder().build().map_err(Error::from)?;
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Api for Client {
    async fn login(&self, email: &str, password: &str) -> Result<Token> {
        let body: Value = self
            .http
            .post(self.url("/users/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(Error::from)?
            .json()
            .await
            .map_err(Error::from)?;

        match body.get("access").and_then(Value::as_str) {
            Some(access) => {
                debug!("Token received");
                Ok(Token::new(access))
            }
            None => {
                let message = message_field(&body)
                    .unwrap_or_else(|| format!("{} does not exist", email));
                Err(MvcatError::Credential { message })
            }
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Registration> {
        let response = self
            .http
            .post(self.url("/users/register"))
            .json(request)
            .send()
            .await
            .map_err(Error::from)?;

        let ok = response.status().is_success();
        let body: Value = response.json().await.map_err(Error::from)?;

        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        let message = message_field(&body);

        if ok && success {
            return Ok(Registration { message });
        }

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            let errors = errors
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect::<Vec<_>>();
            if !errors.is_empty() {
                return Err(MvcatError::Validation { errors });
            }
        }

        // Some service versions report success only through the message text.
        match message {
            Some(message) if message.to_lowercase().contains("success") => {
                Ok(Registration {
                    message: Some(message),
                })
            }
            message => Err(MvcatError::Api {
                message: message.unwrap_or_else(|| "Registration failed".to_owned()),
            }),
        }
    }

    async fn user_details(&self, token: &Token) -> Result<UserDetails> {
        let body: Value = self
            .get_authorized(self.url("/users/details"), token)
            .await?
            .json()
            .await
            .map_err(Error::from)?;

        match body.get("user") {
            Some(user) => serde_json::from_value(user.clone())
                .map_err(|err| Error::decode(err.to_string()).into()),
            None => Err(Error::decode("details response without user field").into()),
        }
    }

    async fn movies(&self, token: &Token) -> Result<Vec<Movie>> {
        let body: Value = self
            .get_authorized(self.url("/movies/getMovies"), token)
            .await?
            .json()
            .await
            .map_err(Error::from)?;

        catalog::decode_movies(body)
    }

    async fn movie(&self, token: &Token, id: &MovieId) -> Result<Movie> {
        self.get_authorized(self.url(&format!("/movies/getMovie/{}", id)), token)
            .await?
            .json()
            .await
            .map_err(|err| Error::from(err).into())
    }

    async fn add_movie(&self, token: &Token, draft: &MovieDraft) -> Result<Movie> {
        let response = self
            .http
            .post(self.url("/movies/addMovie"))
            .bearer_auth(token.as_str())
            .json(draft)
            .send()
            .await
            .map_err(Error::from)?;

        // The created record must echo back a server-assigned identifier.
        error_for_status(response)
            .await?
            .json()
            .await
            .map_err(|err| Error::from(err).into())
    }

    async fn update_movie(
        &self,
        token: &Token,
        id: &MovieId,
        draft: &MovieDraft,
    ) -> Result<Movie> {
        let response = self
            .http
            .patch(self.url(&format!("/movies/updateMovie/{}", id)))
            .bearer_auth(token.as_str())
            .json(draft)
            .send()
            .await
            .map_err(Error::from)?;

        error_for_status(response)
            .await?
            .json()
            .await
            .map_err(|err| Error::from(err).into())
    }

    async fn delete_movie(&self, token: &Token, id: &MovieId) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/movies/deleteMovie/{}", id)))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(Error::from)?;

        error_for_status(response).await?;
        Ok(())
    }

    async fn add_comment(&self, token: &Token, id: &MovieId, text: &CommentText) -> Result<Movie> {
        let response = self
            .http
            .patch(self.url(&format!("/movies/addComment/{}", id)))
            .bearer_auth(token.as_str())
            .json(&json!({ "comment": text }))
            .send()
            .await
            .map_err(Error::from)?;

        error_for_status(response)
            .await?
            .json()
            .await
            .map_err(|err| Error::from(err).into())
    }
}

impl Client {
    async fn get_authorized(&self, url: String, token: &Token) -> common::Result<reqwest::Response> {
        let response = self.http.get(url).bearer_auth(token.as_str()).send().await?;

        error_for_status(response).await
    }
}

// Treat any non-success status as failure, preferring the message carried in
// the body over a generic fallback.
async fn error_for_status(response: reqwest::Response) -> common::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .as_ref()
        .and_then(message_field);

    Err(Error::from(ErrorKind::UnexpectedStatus { status, message }))
}

fn message_field(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
