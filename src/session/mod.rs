mod token;
pub use token::{Token, TokenStore};

use tokio::sync::RwLock;

use crate::client::{Api, UserDetails};
use crate::common::warn;
use crate::Result;

/// Client-held record of the authenticated user. All fields are `None` in
/// the logged-out ("absent") state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub id: Option<String>,
    pub is_admin: Option<bool>,
    pub email: Option<String>,
}

impl Session {
    pub fn absent() -> Self {
        Session::default()
    }

    pub fn is_absent(&self) -> bool {
        self.id.is_none()
    }

    pub fn admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }
}

impl From<UserDetails> for Session {
    fn from(details: UserDetails) -> Self {
        Session {
            id: Some(details.id),
            is_admin: Some(details.is_admin),
            email: details.email,
        }
    }
}

/// Single source of truth for who is logged in and with what role.
///
/// The session and the persisted token stay consistent: every path that
/// clears one clears the other, and a populated session implies a
/// previously successful token exchange. Mutations take the write lock for
/// their whole duration, token file included.
#[derive(Debug)]
pub struct SessionStore {
    session: RwLock<Session>,
    tokens: TokenStore,
}

impl SessionStore {
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            session: RwLock::new(Session::absent()),
            tokens,
        }
    }

    /// Exchange the persisted token for user details and populate the
    /// session. Any failure degrades silently to the absent state; an
    /// expired or invalid token must never surface as an error here.
    pub async fn initialize(&self, api: &dyn Api) -> Session {
        let token = match self.tokens.load().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.set(Session::absent()).await;
                return Session::absent();
            }
            Err(err) => {
                warn!(error = %err, "Reading persisted token failed");
                return self.degrade().await;
            }
        };

        match api.user_details(&token).await {
            Ok(details) => {
                let session = Session::from(details);
                self.set(session.clone()).await;
                session
            }
            Err(err) => {
                warn!(error = %err, "Session fetch failed");
                self.degrade().await
            }
        }
    }

    /// Overwrite the current session. Does not touch the persisted token;
    /// the login flow persists the token before calling this.
    pub async fn set(&self, session: Session) {
        *self.session.write().await = session;
    }

    /// Erase the persisted token and reset the session to absent.
    pub async fn clear(&self) -> Result<()> {
        let mut session = self.session.write().await;
        let removed = self.tokens.forget().await;
        *session = Session::absent();
        removed
    }

    pub async fn current(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn token(&self) -> Result<Option<Token>> {
        self.tokens.load().await
    }

    pub async fn persist_token(&self, token: &Token) -> Result<()> {
        self.tokens.persist(token).await
    }

    async fn degrade(&self) -> Session {
        if let Err(err) = self.clear().await {
            warn!(error = %err, "Clearing session state failed");
        }
        Session::absent()
    }
}
