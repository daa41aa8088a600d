use url::Url;

/// Derive the comparison domain for a login URI: the host component with a
/// single leading `www.` label stripped. Malformed URIs come back unchanged
/// so they still participate in keying instead of collapsing to `""` and
/// colliding with entries that have no URI at all.
pub fn normalize_domain(uri: &str) -> String {
    if uri.is_empty() {
        return String::new();
    }

    match Url::parse(uri) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            host.strip_prefix("www.").unwrap_or(host).to_string()
        }
        Err(_) => uri.to_string(),
    }
}
