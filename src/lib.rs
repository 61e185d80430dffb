pub mod client;
pub mod config;
pub mod data_models;
pub mod dom;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod schema;
pub mod urls;

pub use client::DocsRs;
pub use config::Config;
pub use error::FetchError;
