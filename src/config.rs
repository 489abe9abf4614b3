use serde::Deserialize;

/// Dispatch settings shared by every request.
///
/// Deserializable from any serde format, missing fields keep their
/// defaults:
/// ```
/// use courier::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "max_forwards": 4 }"#).unwrap();
/// assert_eq!(config.max_forwards, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The maximum number of implicit forwards a single resolution may
    /// follow before failing with [`Error::ForwardLoop`](crate::Error::ForwardLoop).
    pub max_forwards: usize,
}

impl Config {
    pub const DEFAULT_MAX_FORWARDS: usize = 32;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_forwards(mut self, max_forwards: usize) -> Self {
        self.max_forwards = max_forwards;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_forwards: Self::DEFAULT_MAX_FORWARDS,
        }
    }
}
