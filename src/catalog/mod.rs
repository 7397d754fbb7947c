mod decode;
pub use decode::decode_movies;

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// Earliest release year the service accepts.
pub const MIN_YEAR: i32 = 1800;

/// Server-assigned movie identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl Deref for MovieId {
    type Target = String;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId::new(s)
    }
}

// Year represents a plausible release year; other components can handle
// Year without re-checking the bound. Upcoming releases are valid, so only
// an earliest-year sanity bound applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub fn new(year: i32) -> Result<Self, CatalogError> {
        if year < MIN_YEAR {
            return Err(CatalogError::YearTooEarly {
                year,
                min: MIN_YEAR,
            });
        }
        Ok(Self(year))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// Non-empty comment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(s: impl Into<String>) -> Result<Self, CatalogError> {
        let s = s.into();
        if s.trim().is_empty() {
            Err(CatalogError::EmptyComment)
        } else {
            Ok(Self(s))
        }
    }
}

impl Deref for CommentText {
    type Target = String;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Catalog entry as served by the remote service.
///
/// Only the identifier and title are guaranteed; the catalog contains
/// records predating several schema changes, so everything else is optional
/// and rendered with a fallback.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "MovieRecord")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub poster: Option<String>,
    pub comments: Vec<Comment>,
}

// Wire shape of a catalog record. Records predating the schema fix spell
// the genre field "gener", and a few carry both spellings; the corrected
// one wins. Nothing past the decode boundary ever sees the misspelling.
#[derive(Deserialize)]
struct MovieRecord {
    #[serde(rename = "_id")]
    id: MovieId,
    title: String,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    gener: Option<String>,
    #[serde(default)]
    poster: Option<String>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Movie {
            id: record.id,
            title: record.title,
            director: record.director,
            year: record.year,
            description: record.description,
            genre: record.genre.or(record.gener),
            poster: record.poster,
            comments: record.comments,
        }
    }
}

/// Comment attached to a movie. Append-only from this client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "comment", default)]
    pub text: Option<String>,
}

/// Request body for add and update operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: Year,
    pub description: String,
    pub genre: String,
    pub poster: String,
}

impl MovieDraft {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: Year,
        description: impl Into<String>,
        genre: impl Into<String>,
        poster: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let draft = Self {
            title: title.into(),
            director: director.into(),
            year,
            description: description.into(),
            genre: genre.into(),
            poster: poster.into(),
        };
        draft.ensure_filled()?;
        Ok(draft)
    }

    fn ensure_filled(&self) -> Result<(), CatalogError> {
        for (field, value) in [
            ("title", &self.title),
            ("director", &self.director),
            ("description", &self.description),
            ("genre", &self.genre),
            ("poster", &self.poster),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField { field });
            }
        }
        Ok(())
    }
}
