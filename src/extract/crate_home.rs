use regex::Regex;
use scraper::Html;

use crate::data_models::CrateHome;
use crate::dom::{first_text, inline_text, non_empty};
use crate::schema::selector;

/// Parse a crate's docs.rs landing page.
///
/// `homepage` is the URL the page was fetched from. `latest_version` comes from
/// the first link rooted at `/{crate}/` and stays `None` when there is none.
pub fn parse_crate_home(html: &str, crate_name: &str, homepage: &str) -> CrateHome {
    let document = Html::parse_document(html);

    let title =
        first_text(&document, &["h1"], inline_text).unwrap_or_else(|| crate_name.to_string());
    let description = document
        .select(&selector(r#"meta[name="description"]"#))
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
        .and_then(non_empty);

    CrateHome {
        crate_name: crate_name.to_string(),
        title,
        description,
        latest_version: latest_version(&document, crate_name),
        homepage: homepage.to_string(),
    }
}

fn latest_version(document: &Html, crate_name: &str) -> Option<String> {
    let prefix = format!("/{crate_name}/");
    let href = document
        .select(&selector("a[href]"))
        .filter_map(|a| a.value().attr("href"))
        .find(|href| href.starts_with(&prefix))?;

    let pattern = Regex::new(&format!("/{}/([^/]+)/", regex::escape(crate_name))).ok()?;
    pattern
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
