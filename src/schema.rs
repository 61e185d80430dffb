//! Versioned page-shape recognition.
//!
//! docs.rs has shipped several markups for the same page type over time. Each
//! page type lists its known shapes newest-first as [`Schema`]s; the first
//! shape whose probe selector matches anything in the document is used for the
//! whole page. Shapes are never merged.

use scraper::{ElementRef, Html, Selector};

/// Maps one matched node to a record. Returning `None` drops the node.
pub type Adapter<R> = for<'a> fn(ElementRef<'a>) -> Option<R>;

pub struct Schema<T> {
    pub name: &'static str,
    /// CSS selector whose presence identifies this shape.
    pub probe: &'static str,
    /// What the page is read with once recognized: an [`Adapter`] for
    /// row-by-row schemas, or a tag naming a page-wide layout.
    pub shape: T,
}

/// First schema whose probe matches the document.
pub fn recognize<'s, T>(document: &Html, schemas: &'s [Schema<T>]) -> Option<&'s Schema<T>> {
    let found = schemas
        .iter()
        .find(|schema| document.select(&selector(schema.probe)).next().is_some());
    if let Some(schema) = found {
        log::debug!("recognized page shape: {}", schema.name);
    }
    found
}

/// Run the recognized schema's [`Adapter`] over every node its probe matches, in
/// document order. Nodes the adapter rejects are skipped without affecting the
/// rest.
pub fn extract_records<R>(document: &Html, schemas: &[Schema<Adapter<R>>]) -> Vec<R> {
    let Some(schema) = recognize(document, schemas) else {
        return Vec::new();
    };
    document
        .select(&selector(schema.probe))
        .filter_map(schema.shape)
        .collect()
}

/// Parse a selector that is known at compile time.
///
/// Panics on invalid CSS: selectors are string literals (or built from fixed
/// identifiers) and covered by tests, so a failure here is a programming error.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}
