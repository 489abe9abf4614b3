use std::fmt;

/// An HTTP method.
///
/// Verbs outside of the standard set are not rejected, they are
/// kept verbatim as [`Method::Custom`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Trace,
    Connect,
    Patch,
    Custom(String),
}

impl Method {
    /// The string representation of this HTTP method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
            Method::Patch => "PATCH",
            Method::Custom(str) => str.as_str(),
        }
    }

    /// Convert from an [`http::Method`](::http::Method).
    pub fn from_http(method: &::http::Method) -> Self {
        Method::from(method.as_str())
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Get
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Method {
    fn from(method: &str) -> Self {
        match method {
            "GET" => Method::Get,
            "PUT" => Method::Put,
            "POST" => Method::Post,
            "DELETE" => Method::Delete,
            "OPTIONS" => Method::Options,
            "HEAD" => Method::Head,
            "TRACE" => Method::Trace,
            "CONNECT" => Method::Connect,
            "PATCH" => Method::Patch,
            other => Method::Custom(other.to_owned()),
        }
    }
}

impl From<String> for Method {
    fn from(method: String) -> Self {
        match Method::from(method.as_str()) {
            Method::Custom(_) => Method::Custom(method),
            known => known,
        }
    }
}

impl From<::http::Method> for Method {
    fn from(method: ::http::Method) -> Self {
        Method::from_http(&method)
    }
}

impl PartialEq<str> for Method {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Method {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
