//! Routes and the targets they resolve to.
//!
//! A [`Route`] is anything that can run a target for a method and a set
//! of path parameters. Its [`Target`] is either a terminal value or
//! another route to forward to:
//! ```
//! use courier::route::{self, Target};
//! use courier::{Incoming, Method, Request};
//!
//! let cupcakes = route::value("/candies/cupcakes", "Delicious Cupcake");
//! let forward = route::callback("/cupcakes", move |_, _| Target::forward(cupcakes.clone()));
//!
//! let mut request = Request::new(&Incoming::default(), Some(Method::Get), Some("/cupcakes"));
//! request.route = Some(forward);
//!
//! assert_eq!(request.response().unwrap(), Some("Delicious Cupcake"));
//! ```

mod callback;
mod methods;
mod value;

pub use callback::{callback, Callback};
pub use methods::{methods, Methods};
pub use value::{value, Value};

use crate::bounded::{BoxError, Rc, Shared};
use crate::http::Method;
use crate::request::Params;

use std::fmt;

/// A shared, dynamically typed [`Route`].
pub type BoxRoute<T> = Rc<dyn Route<T>>;

/// Share a route so it can be bound to requests.
///
/// ```
/// use courier::route::{self, Route, Target};
/// use courier::{BoxError, Method, Params};
///
/// struct Health;
///
/// impl Route<&'static str> for Health {
///     fn run_target(&self, _: &Method, _: &Params) -> Result<Target<&'static str>, BoxError> {
///         Ok(Target::respond("ok"))
///     }
/// }
///
/// let health = route::boxed(Health);
/// assert_eq!(health.pattern(), None);
/// ```
pub fn boxed<T, R>(route: R) -> BoxRoute<T>
where
    R: Route<T> + 'static,
{
    Rc::new(route)
}

/// A route that can be bound to a [`Request`](crate::Request).
pub trait Route<T>: Shared {
    /// Run this route's target.
    ///
    /// Returning [`Target::Forward`] hands the request over to another
    /// route, which is run with an empty parameter list.
    fn run_target(&self, method: &Method, params: &Params) -> Result<Target<T>, BoxError>;

    /// The path pattern this route was registered under, if any.
    fn pattern(&self) -> Option<&str> {
        None
    }
}

/// The outcome of running a route.
pub enum Target<T> {
    /// A terminal response value.
    Respond(T),
    /// Continue resolution on another route.
    Forward(BoxRoute<T>),
}

impl<T> Target<T> {
    pub fn respond(value: T) -> Self {
        Target::Respond(value)
    }

    pub fn forward(route: BoxRoute<T>) -> Self {
        Target::Forward(route)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Target::Forward(_))
    }
}

impl<T> fmt::Debug for Target<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Respond(value) => f.debug_tuple("Respond").field(value).finish(),
            Target::Forward(route) => f
                .debug_tuple("Forward")
                .field(&route.pattern().unwrap_or("<unnamed>"))
                .finish(),
        }
    }
}

/// A value that can be converted into a [`Target`].
///
/// This lets callback routes return either a target or a
/// fallible target.
pub trait IntoTarget<T> {
    fn into_target(self) -> Result<Target<T>, BoxError>;
}

impl<T> IntoTarget<T> for Target<T> {
    fn into_target(self) -> Result<Target<T>, BoxError> {
        Ok(self)
    }
}

impl<T, E> IntoTarget<T> for Result<Target<T>, E>
where
    E: Into<BoxError>,
{
    fn into_target(self) -> Result<Target<T>, BoxError> {
        self.map_err(Into::into)
    }
}
