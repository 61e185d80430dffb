//! Request URLs for each docs.rs page type.
//!
//! Every builder takes the base URL (scheme and host, no trailing slash) and
//! returns a plain string; nothing here touches the network.

use urlencoding::encode;

pub const DEFAULT_VERSION: &str = "latest";

pub fn search_url(base: &str, query: &str) -> String {
    format!("{base}/releases/search?query={}", encode(query))
}

pub fn crate_home_url(base: &str, crate_name: &str) -> String {
    format!("{base}/{}/", encode(crate_name))
}

/// Documentation page URL. An empty `path` (after trimming slashes) points at
/// the crate root index.
pub fn doc_page_url(base: &str, crate_name: &str, version: &str, path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        return module_listing_url(base, crate_name, version);
    }
    format!(
        "{base}/{}/{}/{path}",
        encode(crate_name),
        encode(version)
    )
}

pub fn module_listing_url(base: &str, crate_name: &str, version: &str) -> String {
    format!(
        "{base}/{}/{}/{}/index.html",
        encode(crate_name),
        encode(version),
        module_name(crate_name)
    )
}

pub fn readme_url(base: &str, crate_name: &str, version: &str) -> String {
    format!("{base}/crate/{}/{}", encode(crate_name), encode(version))
}

/// Name of the crate's root module: rustdoc writes `serde-json` as `serde_json`.
pub fn module_name(crate_name: &str) -> String {
    crate_name.replace('-', "_")
}

pub fn version_or_default(version: Option<&str>) -> &str {
    match version {
        Some(v) if !v.trim().is_empty() => v,
        _ => DEFAULT_VERSION,
    }
}
