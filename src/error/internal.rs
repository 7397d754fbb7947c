use std::error;
use std::fmt;
use std::io;

use backtrace::Backtrace;

#[derive(Debug)]
pub(crate) struct Error {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
    Io(io::Error),
    Http(reqwest::Error),
    // Non-success status with the message the body carried, if any.
    UnexpectedStatus {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    ResponseDecode {
        description: String,
    },
    Config(serde_yaml::Error),
    MissingConfig {
        name: &'static str,
        hint: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(err) => err.fmt(f),
            ErrorKind::Http(err) => err.fmt(f),
            ErrorKind::UnexpectedStatus { status, message } => match message {
                Some(message) => write!(f, "unexpected status {}: {}", status, message),
                None => write!(f, "unexpected status {}", status),
            },
            ErrorKind::ResponseDecode { description } => {
                write!(f, "response decode error. {}", description)
            }
            ErrorKind::Config(err) => err.fmt(f),
            ErrorKind::MissingConfig { name, hint } => {
                write!(f, "missing configuration: {} ({})", name, hint)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::from(ErrorKind::Http(err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::from(ErrorKind::Config(err))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_backtrace(kind)
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn decode(description: impl Into<String>) -> Self {
        Error::from(ErrorKind::ResponseDecode {
            description: description.into(),
        })
    }

    fn with_backtrace(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl error::Error for Error {}
