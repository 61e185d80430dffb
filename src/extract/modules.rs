use scraper::{ElementRef, Html};

use crate::data_models::{Item, ModuleListing};
use crate::dom::{inline_text, non_empty};
use crate::extract::doc_page::{definition_of, sibling_or_row_desc};
use crate::schema::{Schema, recognize, selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingShape {
    /// `<h2 id="structs">` followed by `<dl class="item-table">` of `dt`/`dd` pairs.
    DefinitionList,
    /// `<h2 id="structs">` followed by an `.item-table` of `.item-name` rows with
    /// sibling `.desc` cells.
    ItemTable,
}

const LISTING_SCHEMAS: &[Schema<ListingShape>] = &[
    Schema {
        name: "definition list",
        probe: "h2[id] + dl.item-table > dt",
        shape: ListingShape::DefinitionList,
    },
    Schema {
        name: "item table",
        probe: ".item-table .item-name, .item-table-wrap .item-name",
        shape: ListingShape::ItemTable,
    },
];

/// Section anchor id and the link class rustdoc gives items of that kind.
#[derive(Debug, Clone, Copy)]
struct Category {
    section: &'static str,
    link_class: &'static str,
}

const MODULES: Category = Category { section: "modules", link_class: "mod" };
const STRUCTS: Category = Category { section: "structs", link_class: "struct" };
const ENUMS: Category = Category { section: "enums", link_class: "enum" };
const FUNCTIONS: Category = Category { section: "functions", link_class: "fn" };
const TRAITS: Category = Category { section: "traits", link_class: "trait" };
const MACROS: Category = Category { section: "macros", link_class: "macro" };

/// Which listing markup the page uses, if any.
pub fn listing_shape(document: &Html) -> Option<ListingShape> {
    recognize(document, LISTING_SCHEMAS).map(|schema| schema.shape)
}

/// Parse a crate root page into per-category item listings.
///
/// A category missing from the page, or a page in an unknown shape, gives an
/// empty list for that category.
pub fn parse_module_listing(html: &str, crate_name: &str, version: &str) -> ModuleListing {
    let document = Html::parse_document(html);
    let shape = listing_shape(&document);
    let items = |category| match shape {
        Some(shape) => category_items(&document, shape, category),
        None => Vec::new(),
    };

    ModuleListing {
        crate_name: crate_name.to_string(),
        version: version.to_string(),
        modules: items(MODULES),
        structs: items(STRUCTS),
        enums: items(ENUMS),
        functions: items(FUNCTIONS),
        traits: items(TRAITS),
        macros: items(MACROS),
    }
}

fn category_items(document: &Html, shape: ListingShape, category: Category) -> Vec<Item> {
    let Category { section, link_class } = category;
    let link = selector(&format!("a.{link_class}"));
    let name_of = |el: ElementRef| el.select(&link).next().map(inline_text).and_then(non_empty);

    match shape {
        ListingShape::DefinitionList => {
            let terms = selector(&format!("#{section} + dl.item-table > dt"));
            document
                .select(&terms)
                .filter_map(|dt| Some(Item::new(name_of(dt)?, definition_of(dt))))
                .collect()
        }
        ListingShape::ItemTable => {
            let rows = selector(&format!(
                "#{section} + .item-table .item-name, #{section} + .item-table-wrap .item-name"
            ));
            document
                .select(&rows)
                .filter_map(|el| {
                    let name = name_of(el)?;
                    Some(Item::new(name, sibling_or_row_desc(el, &["desc", "desc-docblock"])))
                })
                .collect()
        }
    }
}
