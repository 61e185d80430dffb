use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;
use scraper::Html;

use crate::data_models::{CrateMetadata, ReadmeInfo};
use crate::dom::{in_non_content, non_empty, readable_text};
use crate::schema::selector;

/// README containers, most specific first.
const README_SELECTORS: &[&str] = &[".readme", "#readme", ".pure-u-14-24"];

const SOURCE_HOSTS: &[&str] = &["github.com", "gitlab.com", "codeberg.org", "bitbucket.org"];

static REPOSITORY_RE: OnceLock<Regex> = OnceLock::new();

fn repository_re() -> &'static Regex {
    REPOSITORY_RE.get_or_init(|| {
        Regex::new(
            r"^https?://(?:www\.)?(?:github\.com|gitlab\.com|codeberg\.org|bitbucket\.org)/[^/?#\s]+/[^/?#\s]+/?$",
        )
        .unwrap_or_else(|e| panic!("invalid repository pattern: {e}"))
    })
}

/// Parse a `/crate/{name}/{version}` page into README text and links.
///
/// `page_url` is the address the page was fetched from; relative links are
/// resolved against it.
pub fn parse_readme(html: &str, crate_name: &str, version: &str, page_url: &str) -> ReadmeInfo {
    let document = Html::parse_document(html);

    let readme = README_SELECTORS.iter().find_map(|css| {
        document
            .select(&selector(css))
            .next()
            .map(readable_text)
            .and_then(non_empty)
    });

    ReadmeInfo {
        crate_name: crate_name.to_string(),
        version: version.to_string(),
        readme,
        metadata: CrateMetadata {
            repository: repository(&document),
            documentation: documentation(&document, crate_name, page_url),
        },
    }
}

/// A link of the exact `host/owner/repo` shape wins; otherwise the first link
/// to any source host. Navigation and footer links are ignored.
fn repository(document: &Html) -> Option<String> {
    let hrefs: Vec<&str> = document
        .select(&selector("a[href]"))
        .filter(|a| !in_non_content(*a))
        .filter_map(|a| a.value().attr("href"))
        .map(str::trim)
        .collect();

    hrefs
        .iter()
        .find(|href| repository_re().is_match(href))
        .or_else(|| {
            hrefs
                .iter()
                .find(|href| SOURCE_HOSTS.iter().any(|host| href.contains(host)))
        })
        .map(|href| href.to_string())
}

/// First link into the crate's own documentation tree on the same site.
fn documentation(document: &Html, crate_name: &str, page_url: &str) -> Option<String> {
    let page = Url::parse(page_url).ok()?;
    let rooted = format!("/{crate_name}/");
    document
        .select(&selector("a[href]"))
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| page.join(href.trim()).ok())
        .find(|url| url.origin() == page.origin() && url.path().starts_with(&rooted))
        .map(String::from)
}
