//! Type-discrimination helpers used by renderers to decide how to present a
//! raw JSON value.
//!
//! Every predicate is total. An absent value (a key that is not present in the
//! source object) is passed as `None` and never matches.

use serde_json::Value;
use url::Url;

/// Returns whether the value is a JSON array.
pub fn is_sequence<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Array(_)))
}

/// Returns whether the value is a JSON object (arrays and `null` excluded).
pub fn is_structured_object<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Object(_)))
}

/// Returns whether the value is a JSON string, including the empty string.
pub fn is_string<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::String(_)))
}

/// Returns whether the value is a string holding a valid web URL.
pub fn is_url<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    match value.into() {
        Some(Value::String(candidate)) => is_valid_url(candidate),
        _ => false,
    }
}

/// Checks that `candidate` is an `http` or `https` URL whose host contains at
/// least one dot.
///
/// Bare hostnames such as `https://google` and other schemes are rejected.
/// Anything else the URL parser accepts (userinfo, ports, internationalized
/// hosts) is allowed.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().map_or(false, |host| host.contains('.'))
        }
        Err(_) => false,
    }
}
