use super::{boxed, BoxRoute, IntoTarget, Route, Target};
use crate::bounded::{BoxError, Shared};
use crate::error::MethodNotAllowed;
use crate::http::Method;
use crate::request::Params;

use std::fmt;

type Handler<T> = Box<dyn HandlerFn<T>>;

trait HandlerFn<T>: Shared {
    fn call(&self, params: &Params) -> Result<Target<T>, BoxError>;
}

impl<T, F, R> HandlerFn<T> for F
where
    F: Fn(&Params) -> R + Shared,
    R: IntoTarget<T>,
{
    fn call(&self, params: &Params) -> Result<Target<T>, BoxError> {
        self(params).into_target()
    }
}

/// Create a route that dispatches on the request method.
///
/// ```
/// use courier::route::{self, Target};
/// use courier::{Incoming, Method, Request};
///
/// let users = route::methods("/users")
///     .get(|_| Target::respond("list"))
///     .post(|_| Target::respond("create"))
///     .into_route();
///
/// let mut request = Request::new(&Incoming::default(), Some(Method::Post), Some("/users"));
/// request.route = Some(users);
/// assert_eq!(request.response().unwrap(), Some("create"));
/// ```
pub fn methods<T>(pattern: impl Into<String>) -> Methods<T> {
    Methods::new(pattern)
}

/// A route with a handler per HTTP method.
///
/// Methods without a handler fail with [`MethodNotAllowed`]. `HEAD`
/// requests are served by the `GET` handler unless one is registered
/// for `HEAD` explicitly.
pub struct Methods<T> {
    pattern: String,
    handlers: Vec<(Method, Handler<T>)>,
}

impl<T> Methods<T> {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handlers: Vec::new(),
        }
    }

    /// Register a handler for `method`, replacing any existing one.
    pub fn on<F, R>(mut self, method: Method, handler: F) -> Self
    where
        F: Fn(&Params) -> R + Shared + 'static,
        R: IntoTarget<T>,
    {
        let handler: Handler<T> = Box::new(handler);

        match self.handlers.iter_mut().find(|(m, _)| *m == method) {
            Some((_, existing)) => *existing = handler,
            None => self.handlers.push((method, handler)),
        }

        self
    }

    /// The methods this route has handlers for.
    pub fn allowed(&self) -> impl Iterator<Item = &Method> {
        self.handlers.iter().map(|(method, _)| method)
    }

    pub fn into_route(self) -> BoxRoute<T>
    where
        T: 'static,
    {
        boxed(self)
    }

    fn handler(&self, method: &Method) -> Option<&Handler<T>> {
        let find = |method: &Method| {
            self.handlers
                .iter()
                .find(|(m, _)| m == method)
                .map(|(_, handler)| handler)
        };

        match method {
            Method::Head => find(&Method::Head).or_else(|| find(&Method::Get)),
            method => find(method),
        }
    }
}

macro_rules! on_method {
    ($name:ident => Method::$method:ident) => {
        #[doc = concat!("Register a handler for the `", stringify!($method), "` method.")]
        pub fn $name<F, R>(self, handler: F) -> Self
        where
            F: Fn(&Params) -> R + Shared + 'static,
            R: IntoTarget<T>,
        {
            self.on(Method::$method, handler)
        }
    };
}

impl<T> Methods<T> {
    on_method!(get => Method::Get);
    on_method!(put => Method::Put);
    on_method!(post => Method::Post);
    on_method!(delete => Method::Delete);
    on_method!(head => Method::Head);
    on_method!(options => Method::Options);
    on_method!(patch => Method::Patch);
}

impl<T> Route<T> for Methods<T> {
    fn run_target(&self, method: &Method, params: &Params) -> Result<Target<T>, BoxError> {
        match self.handler(method) {
            Some(handler) => handler.call(params),
            None => Err(MethodNotAllowed {
                method: method.clone(),
                pattern: self.pattern.clone(),
            }
            .into()),
        }
    }

    fn pattern(&self) -> Option<&str> {
        Some(self.pattern.as_str())
    }
}

impl<T> fmt::Debug for Methods<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Methods")
            .field("pattern", &self.pattern)
            .field("allowed", &self.allowed().collect::<Vec<_>>())
            .finish()
    }
}
