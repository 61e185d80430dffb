//! Smoke tests against the real docs.rs. They need network access and depend
//! on the site's current markup, so they only run on request:
//!
//! ```sh
//! cargo test --test live_docsrs -- --ignored
//! ```

use anyhow::Result;
use docsrs_scraper::{Config, DocsRs};

fn client() -> DocsRs {
    DocsRs::new(&Config::default()).unwrap()
}

#[tokio::test]
#[ignore = "hits docs.rs"]
async fn test_live_search_tokio() -> Result<()> {
    let response = client().search("tokio", None).await?;
    assert!(response.total > 0, "no search results");
    assert!(response.results.iter().any(|r| r.name == "tokio"));
    Ok(())
}

#[tokio::test]
#[ignore = "hits docs.rs"]
async fn test_live_list_modules_tokio() -> Result<()> {
    let listing = client().list_modules("tokio", None).await?;
    assert!(!listing.modules.is_empty(), "no modules found");
    assert!(listing.modules.iter().any(|m| m.name == "runtime"));
    Ok(())
}

#[tokio::test]
#[ignore = "hits docs.rs"]
async fn test_live_readme_tokio() -> Result<()> {
    let info = client().get_readme("tokio", None).await?;
    assert!(info.readme.is_some(), "no readme");
    Ok(())
}

#[tokio::test]
#[ignore = "hits docs.rs"]
async fn test_live_crate_home_tokio() -> Result<()> {
    let home = client().crate_home("tokio").await?;
    assert!(home.latest_version.is_some(), "no latest version");
    Ok(())
}

#[tokio::test]
#[ignore = "hits docs.rs"]
async fn test_live_missing_crate_is_upstream_error() -> Result<()> {
    let err = client()
        .get_doc("this-crate-does-not-exist-4f1c2a", None, None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    Ok(())
}
