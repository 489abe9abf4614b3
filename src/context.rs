use crate::http::Method;

use std::borrow::Cow;

/// The ambient state of the call being served.
///
/// A [`Request`](crate::Request) falls back to this context for any
/// method or path it was not explicitly given. It is implemented for
/// the [`http`](::http) request types, and [`Incoming`] can be used
/// when the values come from somewhere else:
/// ```
/// use courier::{Incoming, Request, Method};
///
/// let cx = Incoming::new(Method::Get, "/users?page=2");
/// let request = Request::<()>::from_context(&cx);
///
/// assert_eq!(request.method, Method::Get);
/// assert_eq!(request.uri, "/users");
/// ```
pub trait Context {
    /// The method of the current call.
    fn method(&self) -> Method;

    /// The raw request target of the current call.
    ///
    /// This may be an origin-form path or an absolute URI, it is
    /// normalized by the request.
    fn target(&self) -> Cow<'_, str>;
}

impl<C> Context for &C
where
    C: Context + ?Sized,
{
    fn method(&self) -> Method {
        (**self).method()
    }

    fn target(&self) -> Cow<'_, str> {
        (**self).target()
    }
}

impl<B> Context for ::http::Request<B> {
    fn method(&self) -> Method {
        Method::from_http(self.method())
    }

    fn target(&self) -> Cow<'_, str> {
        Cow::Owned(self.uri().to_string())
    }
}

impl Context for ::http::request::Parts {
    fn method(&self) -> Method {
        Method::from_http(&self.method)
    }

    fn target(&self) -> Cow<'_, str> {
        Cow::Owned(self.uri.to_string())
    }
}

/// An owned snapshot of an incoming call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Incoming {
    /// The request's method.
    pub method: Method,

    /// The raw request target.
    pub target: String,
}

impl Incoming {
    pub fn new(method: impl Into<Method>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
        }
    }

    /// Capture the ambient state of another context.
    pub fn capture<C>(cx: &C) -> Self
    where
        C: Context + ?Sized,
    {
        Self {
            method: cx.method(),
            target: cx.target().into_owned(),
        }
    }
}

impl Context for Incoming {
    fn method(&self) -> Method {
        self.method.clone()
    }

    fn target(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.target)
    }
}

impl<B> From<&::http::Request<B>> for Incoming {
    fn from(req: &::http::Request<B>) -> Self {
        Incoming::capture(req)
    }
}

impl From<&::http::request::Parts> for Incoming {
    fn from(parts: &::http::request::Parts) -> Self {
        Incoming::capture(parts)
    }
}
