//! HTML-to-record extractors, one per docs.rs page type.
//!
//! Every extractor is a pure function of the page markup plus the request
//! parameters it echoes back, so each can be tested against captured pages.

pub mod crate_home;
pub mod doc_page;
pub mod modules;
pub mod readme;
pub mod search;

pub use crate_home::parse_crate_home;
pub use doc_page::{DocPageRequest, MAX_CONTENT_BLOCKS, MAX_ITEMS, parse_doc_page};
pub use modules::{ListingShape, listing_shape, parse_module_listing};
pub use readme::parse_readme;
pub use search::{parse_search, split_name_version};
