use std::fmt::{Display, Formatter};

use thiserror::Error;

pub use crate::Result;

/// raw failure payload surfaced by the transport
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// http status, none when no response arrived at all
    pub status: Option<u16>,
    pub body: String,
}

impl ErrorBody {
    pub fn new(status: Option<u16>, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl Display for ErrorBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{}: {}", status, self.body),
            None => write!(f, "{}", self.body),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// backend request failed
    #[error("request failed: {0}")]
    Network(ErrorBody),
}

impl Error {
    pub fn network(status: Option<u16>, body: impl Into<String>) -> Self {
        Error::Network(ErrorBody::new(status, body))
    }

    /// the payload the presentation layer gets to see
    pub fn body(&self) -> &ErrorBody {
        match self {
            Error::Network(body) => body,
        }
    }
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        Error::network(None, value.to_string())
    }
}
