use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub docs_url: String,
}

/// Envelope returned by the `search` operation. `total` counts every parsed
/// row, `results` holds at most the requested limit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrateHome {
    #[serde(rename = "crate")]
    pub crate_name: String,
    pub title: String,
    pub description: Option<String>,
    pub latest_version: Option<String>,
    pub homepage: String,
}

/// A named entry in a rustdoc listing (module, struct, function, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Item {
        Item {
            name: name.into(),
            description,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocPage {
    #[serde(rename = "crate")]
    pub crate_name: String,
    pub version: String,
    pub path: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub content: Vec<String>,
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ModuleListing {
    #[serde(rename = "crate")]
    pub crate_name: String,
    pub version: String,
    pub modules: Vec<Item>,
    pub structs: Vec<Item>,
    pub enums: Vec<Item>,
    pub functions: Vec<Item>,
    pub traits: Vec<Item>,
    pub macros: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CrateMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReadmeInfo {
    #[serde(rename = "crate")]
    pub crate_name: String,
    pub version: String,
    pub readme: Option<String>,
    pub metadata: CrateMetadata,
}
