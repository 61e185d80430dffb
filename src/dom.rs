use reqwest::Url;
use scraper::{ElementRef, Html, Node};

use crate::schema::selector;

/// Elements whose text never belongs to readable content.
const NON_CONTENT: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "button", "svg", "template",
];

/// Text of an element on one line, whitespace runs collapsed to one space.
pub fn inline_text(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Rendered text of the first match of the first selector that yields any.
pub fn first_text(
    document: &Html,
    selectors: &[&str],
    render: fn(ElementRef) -> String,
) -> Option<String> {
    selectors.iter().find_map(|css| {
        document
            .select(&selector(css))
            .next()
            .map(render)
            .and_then(non_empty)
    })
}

/// Whether the element is, or sits inside, page chrome such as navigation.
pub fn in_non_content(el: ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .chain(std::iter::once(el))
        .any(|e| NON_CONTENT.contains(&e.value().name()))
}

pub fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Nearest ancestor element satisfying `pred`.
pub fn closest<'a>(el: ElementRef<'a>, pred: impl Fn(ElementRef<'a>) -> bool) -> Option<ElementRef<'a>> {
    el.ancestors().filter_map(ElementRef::wrap).find(|a| pred(*a))
}

/// Readable text of an element: skips non-content elements, breaks lines at
/// block boundaries and collapses runs of blank lines.
pub fn readable_text(el: ElementRef) -> String {
    let mut out = String::new();
    walk(el, &mut out);
    compress_lines(&out)
}

fn walk(el: ElementRef, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => push_collapsed(out, text),
            Node::Element(element) => {
                let name = element.name();
                if NON_CONTENT.contains(&name) {
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = is_block_like(name);
                if block && !out.ends_with('\n') {
                    out.push('\n');
                }
                walk(child_el, out);
                if block && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

// Whitespace runs become a single space; none at the start of a line.
fn push_collapsed(out: &mut String, text: &str) {
    for ch in text.chars() {
        if !ch.is_whitespace() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with([' ', '\n']) {
            out.push(' ');
        }
    }
}

fn is_block_like(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "section"
            | "article"
            | "li"
            | "ul"
            | "ol"
            | "pre"
            | "table"
            | "tr"
            | "blockquote"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}

fn compress_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve an href against the URL of the page it was found on. An href that
/// cannot be resolved is returned as written.
pub fn absolutize(page_url: &str, href: &str) -> String {
    Url::parse(page_url)
        .and_then(|page| page.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}
