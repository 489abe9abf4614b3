use crate::bounded::BoxError;
use crate::http::Method;

use thiserror::Error as ThisError;

/// An error that occurred while resolving a request.
///
/// Errors produced by a route's target are passed through untouched
/// as [`Error::Target`], the original value can be recovered with
/// [`Error::into_target`] or downcast through [`Error::target`].
#[derive(Debug, ThisError)]
pub enum Error {
    /// The route's target failed.
    #[error("route target failed: {0}")]
    Target(#[source] BoxError),

    /// A chain of implicit forwards did not settle on a response.
    #[error("forward loop detected: more than {limit} forwards")]
    ForwardLoop {
        /// The configured maximum number of forwards.
        limit: usize,
    },
}

impl Error {
    /// The error returned by the route target, if that is what failed.
    pub fn target(&self) -> Option<&BoxError> {
        match self {
            Error::Target(err) => Some(err),
            Error::ForwardLoop { .. } => None,
        }
    }

    /// Take the error returned by the route target.
    pub fn into_target(self) -> Result<BoxError, Self> {
        match self {
            Error::Target(err) => Ok(err),
            other => Err(other),
        }
    }

    /// Returns `true` if this error was caused by a runaway forward chain.
    pub fn is_forward_loop(&self) -> bool {
        matches!(self, Error::ForwardLoop { .. })
    }
}

/// Returned by resource routes for methods they do not handle.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("method {method} is not allowed on '{pattern}'")]
pub struct MethodNotAllowed {
    pub method: Method,
    pub pattern: String,
}

/// Error returned by [`Request::param`](crate::Request::param).
#[derive(Debug, ThisError)]
pub enum ParamError {
    /// There is no parameter at the requested position.
    #[error("expected route parameter at position {index}")]
    NotFound { index: usize },

    /// The parameter could not be parsed into the requested type.
    #[error("error parsing route parameter at position {index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: BoxError,
    },
}
