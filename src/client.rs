use crate::config::Config;
use crate::data_models::{CrateHome, DocPage, ModuleListing, ReadmeInfo, SearchResponse, SearchResult};
use crate::error::FetchError;
use crate::extract::{
    DocPageRequest, parse_crate_home, parse_doc_page, parse_module_listing, parse_readme,
    parse_search,
};
use crate::fetch::Fetcher;
use crate::urls;

pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const MAX_SEARCH_LIMIT: usize = 50;

/// docs.rs scraper: builds the URL, fetches it once and parses the page.
///
/// Calls share nothing but the connection pool inside the HTTP client, so any
/// number of them can be in flight at once.
#[derive(Debug, Clone)]
pub struct DocsRs {
    fetcher: Fetcher,
    base_url: String,
}

impl DocsRs {
    pub fn new(config: &Config) -> Result<DocsRs, FetchError> {
        Ok(DocsRs {
            fetcher: Fetcher::new(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All result rows for `query`, unsliced.
    pub async fn search_crates(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        let url = urls::search_url(&self.base_url, query);
        let html = self.fetcher.fetch_markup(&url).await?;
        Ok(parse_search(&html, &url))
    }

    /// Search envelope: `total` counts every row, `results` keeps the first
    /// `limit` (default 10, clamped to 1..=50).
    pub async fn search(&self, query: &str, limit: Option<usize>) -> Result<SearchResponse, FetchError> {
        let limit = limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        let mut results = self.search_crates(query).await?;
        let total = results.len();
        results.truncate(limit);
        Ok(SearchResponse {
            query: query.to_string(),
            total,
            results,
        })
    }

    pub async fn crate_home(&self, crate_name: &str) -> Result<CrateHome, FetchError> {
        let url = urls::crate_home_url(&self.base_url, crate_name);
        let html = self.fetcher.fetch_markup(&url).await?;
        Ok(parse_crate_home(&html, crate_name, &url))
    }

    /// A documentation page. `path` is relative to `/{crate}/{version}/`; when
    /// empty the crate root index is fetched and the record's path is `"index"`.
    pub async fn get_doc(
        &self,
        crate_name: &str,
        version: Option<&str>,
        path: Option<&str>,
    ) -> Result<DocPage, FetchError> {
        let version = urls::version_or_default(version);
        let path = path.unwrap_or_default();
        let url = urls::doc_page_url(&self.base_url, crate_name, version, path);
        let html = self.fetcher.fetch_markup(&url).await?;
        Ok(parse_doc_page(
            &html,
            DocPageRequest {
                crate_name,
                version,
                path,
                url: &url,
            },
        ))
    }

    pub async fn list_modules(
        &self,
        crate_name: &str,
        version: Option<&str>,
    ) -> Result<ModuleListing, FetchError> {
        let version = urls::version_or_default(version);
        let url = urls::module_listing_url(&self.base_url, crate_name, version);
        let html = self.fetcher.fetch_markup(&url).await?;
        Ok(parse_module_listing(&html, crate_name, version))
    }

    pub async fn get_readme(
        &self,
        crate_name: &str,
        version: Option<&str>,
    ) -> Result<ReadmeInfo, FetchError> {
        let version = urls::version_or_default(version);
        let url = urls::readme_url(&self.base_url, crate_name, version);
        let html = self.fetcher.fetch_markup(&url).await?;
        Ok(parse_readme(&html, crate_name, version, &url))
    }
}
