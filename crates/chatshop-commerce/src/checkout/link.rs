//! Messaging-app deep links.

/// Build `https://<host>/<destination>?text=<percent-encoded message>`.
///
/// A scheme or trailing slash on `host` is tolerated. Without a
/// destination the link opens the app's contact picker: `https://<host>/?text=`.
pub(crate) fn build_deep_link(host: &str, destination: Option<&str>, message: &str) -> String {
    let host = host
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let path = destination.map(normalize_destination).unwrap_or_default();
    format!(
        "https://{host}/{path}?text={}",
        urlencoding::encode(message)
    )
}

/// Reduce a phone-number contact to its digits (`+34 600-00-00-00` →
/// `34600000000`); other identifiers are percent-encoded as a path segment.
pub fn normalize_destination(destination: &str) -> String {
    let trimmed = destination.trim();
    let is_phone = trimmed.chars().any(|c| c.is_ascii_digit())
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')' | '.'));
    if is_phone {
        trimmed.chars().filter(char::is_ascii_digit).collect()
    } else {
        urlencoding::encode(trimmed).into_owned()
    }
}
