use scraper::{ElementRef, Html};

use crate::data_models::SearchResult;
use crate::dom::{absolutize, inline_text, non_empty};
use crate::schema::{Adapter, Schema, extract_records, selector};

/// Row shapes of the search results page, richest first.
const SEARCH_SCHEMAS: &[Schema<Adapter<SearchResult>>] = &[
    Schema {
        name: "labeled cells",
        probe: "li.release",
        shape: labeled_row,
    },
    Schema {
        name: "combined label",
        probe: "a.release",
        shape: combined_row,
    },
];

/// Parse a docs.rs search results page into rows, in document order.
///
/// Rows that lack either a name or a link are skipped. `docs_url` is resolved
/// against `page_url`, the address the results page was fetched from.
pub fn parse_search(html: &str, page_url: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    extract_records(&document, SEARCH_SCHEMAS)
        .into_iter()
        .map(|mut row| {
            row.docs_url = absolutize(page_url, &row.docs_url);
            row
        })
        .collect()
}

/// Separate a combined `{name}-{version}` label.
///
/// Crate names may contain hyphens, so only the last hyphen is considered,
/// and only when what follows it starts with a digit: `my-crate-1.2.3` gives
/// `my-crate` and `1.2.3`. Anything else, including a pre-release label such
/// as `foo-1.0.0-beta.1`, is returned whole with no version.
pub fn split_name_version(label: &str) -> (String, Option<String>) {
    let label = label.trim();
    match label.rsplit_once('-') {
        Some((name, version))
            if !name.is_empty() && version.starts_with(|c: char| c.is_ascii_digit()) =>
        {
            (name.to_string(), Some(version.to_string()))
        }
        _ => (label.to_string(), None),
    }
}

// <li class="release"><div class="release-name"><a href="..">name</a></div>
// <div class="version">..</div><div class="description">..</div></li>
fn labeled_row(row: ElementRef) -> Option<SearchResult> {
    let link = row.select(&selector(".release-name a")).next()?;
    let href = link.value().attr("href")?;
    build_row(
        &inline_text(link),
        href,
        cell(row, ".version"),
        cell(row, ".description"),
    )
}

// <a class="release" href=".."><div class="name">name-1.2.3</div>
// <div class="description">..</div></a>
fn combined_row(row: ElementRef) -> Option<SearchResult> {
    let href = row.value().attr("href")?;
    let label = row.select(&selector(".name")).next().map(inline_text)?;
    build_row(
        &label,
        href,
        cell(row, ".version"),
        cell(row, ".description"),
    )
}

fn cell(row: ElementRef, css: &str) -> Option<String> {
    row.select(&selector(css))
        .next()
        .map(inline_text)
        .and_then(non_empty)
}

fn build_row(
    label: &str,
    href: &str,
    version: Option<String>,
    description: Option<String>,
) -> Option<SearchResult> {
    let href = href.trim();
    if label.is_empty() || href.is_empty() {
        return None;
    }
    let (name, version) = match version {
        Some(version) => (label.to_string(), Some(version)),
        None => split_name_version(label),
    };
    Some(SearchResult {
        name,
        version,
        description,
        docs_url: href.to_string(),
    })
}
