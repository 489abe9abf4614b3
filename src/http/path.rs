/// Reduce a raw request target to an absolute path.
///
/// Absolute URIs (`http://host/search?q=foo`) keep only their path
/// component, as do scheme-relative targets (`//host/search`). Query
/// strings and fragments are always dropped. Input that cannot be
/// parsed is cleaned up by hand rather than rejected, so the result
/// always begins with `/`.
///
/// ```
/// use courier::http::normalize_path;
///
/// assert_eq!(normalize_path("http://google.com/search?q=foo"), "/search");
/// assert_eq!(normalize_path("//google.com/search"), "/search");
/// assert_eq!(normalize_path("/users?page=2"), "/users");
/// ```
pub fn normalize_path(raw: &str) -> String {
    let raw = raw.trim();

    let rest = match after_scheme(raw) {
        Some(rest) => rest,
        None => match raw.strip_prefix("//") {
            Some(rest) => return absolute(strip_query(after_authority(rest))),
            None => return absolute(strip_query(raw)),
        },
    };

    match raw.parse::<::http::Uri>() {
        Ok(uri) if uri.scheme().is_some() => absolute(uri.path()),
        _ => {
            log::trace!("falling back to manual path extraction for {:?}", raw);

            absolute(strip_query(after_authority(rest)))
        }
    }
}

/// Returns everything after `scheme://` if `raw` starts with a scheme.
fn after_scheme(raw: &str) -> Option<&str> {
    let (scheme, rest) = raw.split_once("://")?;

    let mut chars = scheme.chars();
    let valid = chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid.then(|| rest)
}

/// Skips the authority at the start of `rest`.
fn after_authority(rest: &str) -> &str {
    rest.find(|c| matches!(c, '/' | '?' | '#'))
        .map(|start| &rest[start..])
        .unwrap_or("")
}

fn strip_query(path: &str) -> &str {
    match path.find(|c| matches!(c, '?' | '#')) {
        Some(end) => &path[..end],
        None => path,
    }
}

fn absolute(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{}", path)
    }
}
