//! Bounds on values shared between requests.
//!
//! Routes are `Send + Sync` and held in an `Arc` by default, so route
//! tables can be used from many threads. The `not-send` feature lifts
//! both requirements for single-threaded hosts.

use std::error::Error;

#[cfg(not(feature = "not-send"))]
pub use std::sync::Arc as Rc;

#[cfg(feature = "not-send")]
pub use std::rc::Rc;

/// A dynamically typed [`Error`].
#[cfg(not(feature = "not-send"))]
pub type BoxError = Box<dyn Error + Send + Sync>;

/// A dynamically typed [`Error`].
#[cfg(feature = "not-send")]
pub type BoxError = Box<dyn Error>;

/// Implemented by every type that can be shared between requests.
#[cfg(not(feature = "not-send"))]
pub trait Shared: Send + Sync {}

#[cfg(not(feature = "not-send"))]
impl<T> Shared for T where T: Send + Sync + ?Sized {}

/// Implemented by every type that can be shared between requests.
#[cfg(feature = "not-send")]
pub trait Shared {}

#[cfg(feature = "not-send")]
impl<T> Shared for T where T: ?Sized {}
