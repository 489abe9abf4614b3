//! Request dispatch with route forwarding.
//!
//! A [`Request`] captures the method and path of an incoming call, is
//! bound to a [`Route`] by the routing layer, and resolves a response by
//! running that route's target. Routes can hand a request over to
//! another route by returning [`Target::Forward`], and callers can do
//! the same with [`Request::forward`].

mod bounded;
mod config;
mod context;
mod error;

pub mod http;
pub mod request;
pub mod route;

pub use bounded::BoxError;
pub use config::Config;
pub use context::{Context, Incoming};
pub use error::{Error, MethodNotAllowed, ParamError};
pub use crate::http::Method;
pub use request::{Params, Request};
pub use route::{BoxRoute, Route, Target};
