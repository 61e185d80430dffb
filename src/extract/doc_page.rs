use scraper::{ElementRef, Html};

use crate::data_models::{DocPage, Item};
use crate::dom::{
    closest, first_text, has_class, inline_text, next_element_sibling, non_empty, readable_text,
};
use crate::schema::{Adapter, Schema, extract_records, selector};

pub const MAX_CONTENT_BLOCKS: usize = 5;
pub const MAX_ITEMS: usize = 20;

const TITLE_SELECTORS: &[&str] = &["h1.fqn", ".main-heading h1", "title"];
const DESCRIPTION_SELECTORS: &[&str] = &[".docblock.type-decl-sub", ".docblock"];

const ITEM_SCHEMAS: &[Schema<Adapter<Item>>] = &[
    Schema {
        name: "item-name rows",
        probe: ".item-name",
        shape: item_name_row,
    },
    Schema {
        name: "definition list",
        probe: "dl.item-table > dt",
        shape: definition_term,
    },
];

/// Where a doc page was fetched from. Echoed into the record verbatim.
#[derive(Debug, Clone, Copy)]
pub struct DocPageRequest<'a> {
    pub crate_name: &'a str,
    pub version: &'a str,
    pub path: &'a str,
    pub url: &'a str,
}

pub fn parse_doc_page(html: &str, request: DocPageRequest) -> DocPage {
    let document = Html::parse_document(html);

    let content = document
        .select(&selector(".main-heading, .docblock"))
        .map(readable_text)
        .filter(|text| !text.is_empty())
        .take(MAX_CONTENT_BLOCKS)
        .collect();

    let mut items = extract_records(&document, ITEM_SCHEMAS);
    items.truncate(MAX_ITEMS);

    DocPage {
        crate_name: request.crate_name.to_string(),
        version: request.version.to_string(),
        path: if request.path.is_empty() {
            "index".to_string()
        } else {
            request.path.to_string()
        },
        url: request.url.to_string(),
        title: first_text(&document, TITLE_SELECTORS, inline_text).unwrap_or_default(),
        description: first_text(&document, DESCRIPTION_SELECTORS, readable_text)
            .unwrap_or_default(),
        content,
        items,
    }
}

fn item_name_row(name_el: ElementRef) -> Option<Item> {
    let name = non_empty(inline_text(name_el))?;
    Some(Item::new(name, sibling_or_row_desc(name_el, &["desc"])))
}

fn definition_term(dt: ElementRef) -> Option<Item> {
    let name = non_empty(inline_text(dt))?;
    Some(Item::new(name, definition_of(dt)))
}

/// Description paired with an `.item-name` node: its sibling `.desc` cell, or
/// failing that the first matching cell in the nearest enclosing row.
pub(crate) fn sibling_or_row_desc(name_el: ElementRef, classes: &[&str]) -> Option<String> {
    let is_desc = |el: ElementRef| classes.iter().any(|class| has_class(el, class));

    if let Some(sibling) = name_el
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| is_desc(*el))
    {
        return non_empty(inline_text(sibling));
    }

    let row = closest(name_el, |el| {
        matches!(el.value().name(), "tr" | "li")
            || has_class(el, "item-row")
            || has_class(el, "item-table")
    })?;
    row.descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| is_desc(*el))
        .map(inline_text)
        .and_then(non_empty)
}

/// The `<dd>` that follows a `<dt>` term, if the next element is one.
pub(crate) fn definition_of(dt: ElementRef) -> Option<String> {
    next_element_sibling(dt)
        .filter(|el| el.value().name() == "dd")
        .map(inline_text)
        .and_then(non_empty)
}
