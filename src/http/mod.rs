//! HTTP primitives consumed by the dispatch core.

mod method;
mod path;

pub use method::Method;
pub use path::normalize_path;
