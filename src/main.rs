use clap::{Parser, Subcommand};
use docsrs_scraper::client::MAX_SEARCH_LIMIT;
use docsrs_scraper::{Config, DocsRs};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Scrape crate information from docs.rs and print it as JSON.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search crates by name or keyword
    Search {
        #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
        query: String,
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_SEARCH_LIMIT as i64))]
        limit: Option<u16>,
    },
    /// Landing page summary of a crate
    CrateHome {
        #[arg(value_name = "CRATE")]
        crate_name: String,
    },
    /// A documentation page (crate root when no path is given)
    GetDoc {
        #[arg(value_name = "CRATE")]
        crate_name: String,
        #[arg(long)]
        version: Option<String>,
        /// e.g. `tokio/runtime/struct.Runtime.html`
        #[arg(long)]
        path: Option<String>,
    },
    /// Modules, structs, enums, functions, traits and macros of a crate root
    ListModules {
        #[arg(value_name = "CRATE")]
        crate_name: String,
        #[arg(long)]
        version: Option<String>,
    },
    /// README text and repository links
    GetReadme {
        #[arg(value_name = "CRATE")]
        crate_name: String,
        #[arg(long)]
        version: Option<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::CrateHome { .. } => "crate_home",
            Command::GetDoc { .. } => "get_doc",
            Command::ListModules { .. } => "list_modules",
            Command::GetReadme { .. } => "get_readme",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let docs = DocsRs::new(&config)?;

    let operation = cli.command.name();
    tracing::info!(operation, base_url = docs.base_url(), "running");

    if let Err(e) = run(&docs, cli.command).await {
        eprintln!("{operation} failed: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(docs: &DocsRs, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Search { query, limit } => {
            print_json(&docs.search(&query, limit.map(usize::from)).await?)
        }
        Command::CrateHome { crate_name } => print_json(&docs.crate_home(&crate_name).await?),
        Command::GetDoc {
            crate_name,
            version,
            path,
        } => print_json(
            &docs
                .get_doc(&crate_name, version.as_deref(), path.as_deref())
                .await?,
        ),
        Command::ListModules {
            crate_name,
            version,
        } => print_json(&docs.list_modules(&crate_name, version.as_deref()).await?),
        Command::GetReadme {
            crate_name,
            version,
        } => print_json(&docs.get_readme(&crate_name, version.as_deref()).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
