use super::{boxed, BoxRoute, Route, Target};
use crate::bounded::{BoxError, Shared};
use crate::http::Method;
use crate::request::Params;

/// Create a route that always responds with a clone of `value`.
pub fn value<T>(pattern: impl Into<String>, value: T) -> BoxRoute<T>
where
    T: Clone + Shared + 'static,
{
    boxed(Value::new(pattern, value))
}

/// A route with a static response.
#[derive(Clone, Debug)]
pub struct Value<T> {
    pattern: String,
    value: T,
}

impl<T> Value<T> {
    pub fn new(pattern: impl Into<String>, value: T) -> Self {
        Self {
            pattern: pattern.into(),
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> Route<T> for Value<T>
where
    T: Clone + Shared,
{
    fn run_target(&self, _: &Method, _: &Params) -> Result<Target<T>, BoxError> {
        Ok(Target::Respond(self.value.clone()))
    }

    fn pattern(&self) -> Option<&str> {
        Some(self.pattern.as_str())
    }
}
