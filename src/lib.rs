pub mod catalog;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;

pub use crate::error::MvcatError;
pub type Result<T, E = crate::error::MvcatError> = std::result::Result<T, E>;

pub use catalog::{Movie, MovieDraft, MovieId};
pub use session::Token;

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::internal::Error> = std::result::Result<T, E>;

    pub(crate) type Error = crate::error::internal::Error;
    pub(crate) type ErrorKind = crate::error::internal::ErrorKind;

    pub use crate::error::MvcatError;

    pub use tracing::{debug, error, info, trace, warn};
}
