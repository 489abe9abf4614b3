use super::{boxed, BoxRoute, IntoTarget, Route, Target};
use crate::bounded::{BoxError, Shared};
use crate::http::Method;
use crate::request::Params;

use std::fmt;

/// Create a route that runs a closure.
///
/// The closure receives the request method and parameters and returns
/// a [`Target`], or a `Result` of one.
pub fn callback<T, F, R>(pattern: impl Into<String>, f: F) -> BoxRoute<T>
where
    F: Fn(&Method, &Params) -> R + Shared + 'static,
    R: IntoTarget<T>,
    T: 'static,
{
    boxed(Callback::new(pattern, f))
}

/// A route backed by a closure.
///
/// See [`callback`] for details.
pub struct Callback<F> {
    pattern: String,
    f: F,
}

impl<F> Callback<F> {
    pub fn new(pattern: impl Into<String>, f: F) -> Self {
        Self {
            pattern: pattern.into(),
            f,
        }
    }
}

impl<T, F, R> Route<T> for Callback<F>
where
    F: Fn(&Method, &Params) -> R + Shared,
    R: IntoTarget<T>,
{
    fn run_target(&self, method: &Method, params: &Params) -> Result<Target<T>, BoxError> {
        (self.f)(method, params).into_target()
    }

    fn pattern(&self) -> Option<&str> {
        Some(self.pattern.as_str())
    }
}

impl<F> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("pattern", &self.pattern)
            .finish()
    }
}
