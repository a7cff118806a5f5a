//! Resolution of API paths against the configured base URL.

use reqwest::Url;

/// Whether `value` starts with an `http://` or `https://` scheme.
pub fn is_absolute_url(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve `path` against `base_url`.
///
/// Absolute paths are returned unchanged. An absolute base is joined with
/// URL reference semantics. A relative base is prefixed to the path with
/// exactly one slash between them.
pub fn resolve_api_url(base_url: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }

    if is_absolute_url(base_url) {
        if let Ok(joined) = Url::parse(base_url).and_then(|base| base.join(path)) {
            return joined.to_string();
        }
    }

    let base = if base_url == "/" {
        ""
    } else {
        base_url.strip_suffix('/').unwrap_or(base_url)
    };
    let resolved = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    if resolved.is_empty() {
        "/".to_string()
    } else {
        resolved
    }
}
