use crate::bounded::BoxError;
use crate::error::ParamError;

use std::convert::Infallible;
use std::fmt;
use std::net::*;
use std::num::*;
use std::slice;
use std::str::FromStr;

/// Positional route parameters, in the order they appear in the path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, param: impl Into<Param>) {
        self.0.push(param.into());
    }

    pub fn get(&self, index: usize) -> Option<&Param> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Param> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Param] {
        &self.0
    }

    /// Parse the parameter at `index`.
    pub fn parse<T>(&self, index: usize) -> Result<T, ParamError>
    where
        T: FromParam,
    {
        let param = self.get(index).ok_or(ParamError::NotFound { index })?;

        T::from_param(param.as_str()).map_err(|e| ParamError::Parse {
            index,
            source: e.into(),
        })
    }
}

impl<P> FromIterator<P> for Params
where
    P: Into<Param>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        Params(iter.into_iter().map(Into::into).collect())
    }
}

impl<P> From<Vec<P>> for Params
where
    P: Into<Param>,
{
    fn from(params: Vec<P>) -> Self {
        params.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> PartialEq<[&'a str]> for Params {
    fn eq(&self, other: &[&'a str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a.as_str() == *b)
    }
}

/// A single route parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Param(Box<str>);

impl Param {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse this parameter into `T`.
    pub fn parse<T>(&self) -> Result<T, T::Error>
    where
        T: FromParam,
    {
        T::from_param(self.as_str())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Param {
    fn from(string: String) -> Self {
        Param(string.into())
    }
}

impl From<&str> for Param {
    fn from(str: &str) -> Self {
        Param(str.into())
    }
}

impl PartialEq<str> for Param {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Param {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A type that can be parsed from a route parameter.
///
/// See [`Request::param`](crate::Request::param) for details.
pub trait FromParam: Sized {
    /// Errors that can occur in [`from_param`](FromParam::from_param).
    type Error: Into<BoxError>;

    /// Parse the type from a parameter's raw value.
    fn from_param(param: &str) -> Result<Self, Self::Error>;
}

impl FromParam for String {
    type Error = Infallible;

    fn from_param(param: &str) -> Result<Self, Self::Error> {
        Ok(param.to_owned())
    }
}

macro_rules! from_param {
    ($($ty:ty),*) => ($(
        impl FromParam for $ty {
            type Error = <$ty as FromStr>::Err;

            fn from_param(param: &str) -> Result<Self, Self::Error> {
                <$ty as FromStr>::from_str(param)
            }
        }
    )*)
}

from_param! {
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    bool, char, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6, SocketAddr,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize
}
