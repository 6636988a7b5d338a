//! URL normalization and favicon resolution helpers
//!
//! Link URLs are stored with an explicit scheme; anything the user typed
//! without one is assumed to be https. Favicon lookup tries the site root
//! first and falls back to Google's s2 service.

use url::Url;

/// Ensure a URL carries an http(s) scheme, defaulting to https
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Favicon URL at the site root, e.g. `https://example.com/favicon.ico`
///
/// Returns `None` when the input cannot be parsed as a URL.
pub fn primary_favicon(raw: &str) -> Option<String> {
    let parsed = Url::parse(&normalize_url(raw)).ok()?;
    let host = parsed.host_str()?;
    let mut origin = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        origin.push_str(&format!(":{port}"));
    }
    Some(format!("{origin}/favicon.ico"))
}

/// Fallback favicon via Google's s2 service, sized 32px
///
/// Returns an empty string for unparseable input, matching the lenient
/// behavior the presentation layer expects from a fallback.
pub fn google_favicon(raw: &str) -> String {
    let Ok(parsed) = Url::parse(&normalize_url(raw)) else {
        return String::new();
    };
    match parsed.host_str() {
        Some(domain) => format!("https://www.google.com/s2/favicons?domain={domain}&sz=32"),
        None => String::new(),
    }
}
