mod param;
pub use param::{FromParam, Param, Params};

use crate::config::Config;
use crate::context::Context;
use crate::error::{Error, ParamError};
use crate::http::{normalize_path, Method};
use crate::route::{BoxRoute, Target};

use std::fmt;

/// A request being dispatched to a route.
///
/// A request is created once per incoming call, bound to a route by
/// the router, and resolved with [`response`](Request::response).
/// Resolution follows forwards until a route responds with a value
/// of type `T`.
pub struct Request<T> {
    /// The request's method.
    pub method: Method,

    /// The request's path.
    ///
    /// Always an absolute path, never including a scheme, host,
    /// query string or fragment.
    pub uri: String,

    /// The route this request is bound to.
    pub route: Option<BoxRoute<T>>,

    /// Positional parameters extracted from the path.
    pub params: Params,

    config: Config,
}

impl<T> Request<T> {
    /// Create a new request.
    ///
    /// A method or path that is not given explicitly is taken from the
    /// ambient context. Either way, the path is normalized: only the
    /// path component of an absolute URI is kept, and query strings are
    /// dropped.
    pub fn new<C>(cx: &C, method: Option<Method>, uri: Option<&str>) -> Self
    where
        C: Context + ?Sized,
    {
        let method = method.unwrap_or_else(|| cx.method());
        let uri = match uri {
            Some(uri) => normalize_path(uri),
            None => normalize_path(&cx.target()),
        };

        log::trace!("new request: {} {}", method, uri);

        Request {
            method,
            uri,
            route: None,
            params: Params::new(),
            config: Config::default(),
        }
    }

    /// Create a request entirely from the ambient context.
    pub fn from_context<C>(cx: &C) -> Self
    where
        C: Context + ?Sized,
    {
        Self::new(cx, None, None)
    }

    /// Use the given dispatch settings for this request.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The dispatch settings used by this request.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bind this request to a matched route and its parameters.
    pub fn bind(&mut self, route: BoxRoute<T>, params: impl Into<Params>) {
        self.route = Some(route);
        self.params = params.into();
    }

    /// Parse the route parameter at `index`.
    ///
    /// ```
    /// use courier::{Incoming, Request};
    ///
    /// let mut request = Request::<()>::from_context(&Incoming::new("GET", "/users/42"));
    /// request.params = vec!["42"].into();
    ///
    /// let id: u64 = request.param(0).unwrap();
    /// assert_eq!(id, 42);
    /// assert!(request.param::<u64>(1).is_err());
    /// ```
    pub fn param<P>(&self, index: usize) -> Result<P, ParamError>
    where
        P: FromParam,
    {
        self.params.parse(index)
    }

    /// Resolve the response of this request.
    ///
    /// Returns `Ok(None)` if no route is bound. Otherwise the bound
    /// route's target is run; if it forwards to another route, that
    /// route becomes the bound route, the parameters are cleared, and
    /// resolution continues until a route responds.
    ///
    /// Fails with [`Error::ForwardLoop`] when more forwards are followed
    /// than the request's [`Config`] allows, or with [`Error::Target`]
    /// when a route fails.
    pub fn response(&mut self) -> Result<Option<T>, Error> {
        let mut forwards = 0;

        loop {
            let route = match &self.route {
                Some(route) => route,
                None => return Ok(None),
            };

            log::trace!(
                "running target of '{}' for {} {}",
                route.pattern().unwrap_or("<unnamed>"),
                self.method,
                self.uri
            );

            let next = match route.run_target(&self.method, &self.params) {
                Ok(Target::Respond(value)) => return Ok(Some(value)),
                Ok(Target::Forward(next)) => next,
                Err(err) => return Err(Error::Target(err)),
            };

            if forwards >= self.config.max_forwards {
                log::warn!(
                    "forward loop on {} {}: gave up at '{}' after {} forwards",
                    self.method,
                    self.uri,
                    next.pattern().unwrap_or("<unnamed>"),
                    forwards
                );

                return Err(Error::ForwardLoop {
                    limit: self.config.max_forwards,
                });
            }

            log::debug!(
                "'{}' forwarded {} {} to '{}'",
                route.pattern().unwrap_or("<unnamed>"),
                self.method,
                self.uri,
                next.pattern().unwrap_or("<unnamed>")
            );

            forwards += 1;
            self.params.clear();
            self.route = Some(next);
        }
    }

    /// Forward this request to another route.
    ///
    /// The currently bound route is replaced without being run, and the
    /// response is resolved from `route`. Parameters are left as they
    /// are.
    pub fn forward(&mut self, route: BoxRoute<T>) -> Result<Option<T>, Error> {
        log::debug!(
            "forwarding {} {} to '{}'",
            self.method,
            self.uri,
            route.pattern().unwrap_or("<unnamed>")
        );

        self.route = Some(route);
        self.response()
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field(
                "route",
                &self.route.as_ref().map(|route| route.pattern().unwrap_or("<unnamed>")),
            )
            .field("params", &self.params)
            .finish()
    }
}
