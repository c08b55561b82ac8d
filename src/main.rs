//! pokedex - Browse the PokeAPI catalogue page by page.
//!
//! Usage:
//!   pokedex                      Launch interactive TUI
//!   pokedex list [--page N]      Print one listing page
//!   pokedex show <NAME|URL>      Print one entry's details
//!   pokedex pages <CUR> <TOTAL>  Print the pagination window
//!   pokedex --help               Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use pokedex_client::{ClientConfig, HttpCatalog};
use pokedex_core::{
    CatalogPage, CatalogSource, EntryDetail, FetchError, PaginationConfig, PaginationController,
    page_window,
};
use pokedex_tui::{ThemeVariant, TuiConfig, UserSettings};

#[derive(Parser)]
#[command(
    name = "pokedex",
    version,
    about = "Browse the PokeAPI catalogue page by page",
    long_about = "pokedex lists the PokeAPI catalogue a page at a time.\n\n\
                  Launch the interactive TUI by running `pokedex`, or use \
                  subcommands for one-shot queries."
)]
struct Cli {
    /// API root (defaults to the saved setting, then the public endpoint)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Entries per page
    #[arg(long, global = true)]
    page_size: Option<u32>,

    /// Page numbers shown on each side of the current page
    #[arg(long, global = true)]
    window: Option<u32>,

    /// Color theme (dark or light)
    #[arg(long)]
    theme: Option<ThemeVariant>,

    /// Log file for the TUI (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Page to open on startup
    #[arg(short, long, default_value = "1")]
    page: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one listing page and print it
    List {
        /// Page to fetch (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Fetch and print one entry's details
    Show {
        /// Entry name (e.g. "pikachu") or detail URL
        name: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the pagination window for a page (no network access)
    Pages {
        /// Current page
        current: u32,

        /// Total number of pages
        total: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let settings = UserSettings::load();

    let pagination = PaginationConfig::builder()
        .page_size(cli.page_size.unwrap_or(settings.pagination.page_size))
        .window(cli.window.unwrap_or(settings.pagination.window))
        .build()
        .wrap_err("Invalid pagination settings")?;

    match cli.command {
        Some(Command::Pages { current, total }) => {
            init_logging(None, "warn")?;
            run_pages(current, total, pagination.window);
        }
        Some(Command::List { page, format }) => {
            init_logging(None, "warn")?;
            let catalog = build_catalog(cli.api_url.as_deref(), cli.timeout, &settings)?;
            block_on(run_list(&catalog, pagination, page, format))?;
        }
        Some(Command::Show { name, format }) => {
            init_logging(None, "warn")?;
            let catalog = build_catalog(cli.api_url.as_deref(), cli.timeout, &settings)?;
            block_on(run_show(&catalog, &name, format))?;
        }
        None => {
            // Launch TUI; logs go to a file so they never touch the screen
            let log_file = match cli.log_file {
                Some(path) => Some(path),
                None => default_log_file(),
            };
            init_logging(log_file.as_deref(), "info")?;

            let catalog = build_catalog(cli.api_url.as_deref(), cli.timeout, &settings)?;
            let config = TuiConfig::new()
                .with_pagination(pagination)
                .with_start_page(cli.page)
                .with_theme(cli.theme.unwrap_or(settings.theme))
                .with_persist_settings(true);

            tracing::info!(
                base_url = catalog.config().base(),
                page_size = pagination.page_size,
                window = pagination.window,
                "Starting TUI"
            );
            pokedex_tui::run(catalog, config)?;
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// The filter comes from `POKEDEX_LOG`, then `RUST_LOG`, then
/// `default_level`. Without a log file, output goes to stderr.
fn init_logging(log_file: Option<&Path>, default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env("POKEDEX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let appender = file_appender(path)?;
            builder.with_writer(appender).with_ansi(false).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Create a non-rotating appender for `path`, creating its directory.
fn file_appender(path: &Path) -> Result<tracing_appender::rolling::RollingFileAppender> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("Log file has no file name: {}", path.display()))?;

    std::fs::create_dir_all(parent)
        .wrap_err_with(|| format!("Can't create log directory {}", parent.display()))?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("pokedex").join("pokedex.log"))
}

/// Build the HTTP catalogue from CLI flags, falling back to saved settings.
fn build_catalog(
    api_url: Option<&str>,
    timeout: Option<u64>,
    settings: &UserSettings,
) -> Result<HttpCatalog> {
    let mut builder = ClientConfig::builder();
    if let Some(url) = api_url.or(settings.api_url.as_deref()) {
        builder.base_url(url);
    }
    builder.timeout_secs(timeout.unwrap_or(settings.timeout_secs));

    let config = builder.build().wrap_err("Invalid client settings")?;
    HttpCatalog::new(config).wrap_err("Failed to create HTTP client")
}

fn block_on<F: std::future::Future<Output = Result<()>>>(fut: F) -> Result<()> {
    tokio::runtime::Runtime::new()?.block_on(fut)
}

/// Print the pagination window for `current` of `total`.
fn run_pages(current: u32, total: u32, window: u32) {
    let tokens = page_window(current, total, window);
    println!("{}", tokens.iter().join(" "));
}

/// One listing page together with the controller that validated it.
struct Listing {
    controller: PaginationController,
    page: CatalogPage,
}

/// Fetch the listing page closest to `requested`.
///
/// The page count is only known after a response, so a page past the end is
/// clamped by the controller and the clamped page is fetched in its place.
async fn fetch_listing<S: CatalogSource>(
    catalog: &S,
    pagination: PaginationConfig,
    requested: u32,
) -> Result<Listing, FetchError> {
    let mut controller = PaginationController::new();
    let requested = requested.max(1);
    let mut page = catalog.fetch_page(requested, pagination.page_size).await?;
    controller.set_total_pages(pagination.total_pages(page.total_count));

    let target = controller.go_to_page(requested).unwrap_or(requested);
    if target != requested {
        page = catalog.fetch_page(target, pagination.page_size).await?;
        controller.set_total_pages(pagination.total_pages(page.total_count));
    }

    Ok(Listing { controller, page })
}

/// Fetch and print one listing page.
async fn run_list(
    catalog: &HttpCatalog,
    pagination: PaginationConfig,
    page: u32,
    format: OutputFormat,
) -> Result<()> {
    let Listing { controller, page: result } = fetch_listing(catalog, pagination, page)
        .await
        .wrap_err_with(|| format!("Failed to load page {}", page.max(1)))?;

    let page = controller.current_page();
    let total_pages = controller.total_pages();
    let tokens = controller.tokens(pagination.window);

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(50));
            println!(
                " Page {page} of {total_pages} ({} entries)",
                result.total_count
            );
            println!("{}", "─".repeat(50));
            println!();

            if result.is_empty() {
                println!(" No entries on this page.");
            } else {
                let offset = pagination.offset(page);
                for (i, entry) in result.entries.iter().enumerate() {
                    let number = u64::from(offset) + i as u64 + 1;
                    println!(" #{number:<5} {}", entry.display_name());
                }
            }

            if !tokens.is_empty() {
                println!();
                println!(" < {} >", tokens.iter().join(" "));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "page": page,
                "total_pages": total_pages,
                "total_count": result.total_count,
                "entries": result.entries,
                "tokens": tokens,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

/// Fetch and print one entry's details.
async fn run_show(catalog: &HttpCatalog, name: &str, format: OutputFormat) -> Result<()> {
    let detail = catalog
        .fetch_detail(name)
        .await
        .wrap_err_with(|| format!("Failed to load {name}"))?;

    match format {
        OutputFormat::Text => print_detail(&detail),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
    }

    Ok(())
}

fn print_detail(detail: &EntryDetail) {
    println!();
    println!(" {}", detail.display_name);
    println!("{}", "─".repeat(50));
    println!(
        " Sprite: {}",
        detail.image_uri.as_deref().unwrap_or("none")
    );
    println!(" Type: {}", detail.type_line());
    println!(" Height: {}, Weight: {}", detail.height, detail.weight);
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pokedex_core::{CatalogEntry, PageToken};

    use super::*;

    /// Catalogue of `count` entries that records every page requested.
    struct CountingCatalog {
        count: u32,
        requests: Mutex<Vec<u32>>,
    }

    impl CountingCatalog {
        fn new(count: u32) -> Self {
            Self {
                count,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<u32> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl CatalogSource for CountingCatalog {
        async fn fetch_page(&self, page: u32, page_size: u32) -> Result<CatalogPage, FetchError> {
            self.requests.lock().unwrap().push(page);
            let start = (page - 1) * page_size;
            let entries = (start..self.count.min(start + page_size))
                .map(|i| CatalogEntry::new(format!("mon-{}", i + 1), format!("ref/{}", i + 1)))
                .collect();
            Ok(CatalogPage {
                entries,
                total_count: self.count,
            })
        }

        async fn fetch_detail(&self, detail_ref: &str) -> Result<EntryDetail, FetchError> {
            Err(FetchError::Status {
                url: detail_ref.to_string(),
                status: 404,
            })
        }
    }

    fn pagination() -> PaginationConfig {
        PaginationConfig::builder()
            .page_size(5u32)
            .window(2u32)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_listing_in_range() {
        let catalog = CountingCatalog::new(23);
        let listing = fetch_listing(&catalog, pagination(), 2).await.unwrap();

        assert_eq!(listing.controller.current_page(), 2);
        assert_eq!(listing.controller.total_pages(), 5);
        assert_eq!(listing.page.entries[0].name, "mon-6");
        assert_eq!(catalog.requests(), [2]);
    }

    #[tokio::test]
    async fn test_listing_past_end_is_clamped() {
        let catalog = CountingCatalog::new(23);
        let listing = fetch_listing(&catalog, pagination(), 300).await.unwrap();

        assert_eq!(listing.controller.current_page(), 5);
        assert_eq!(listing.controller.total_pages(), 5);
        let names: Vec<_> = listing.page.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["mon-21", "mon-22", "mon-23"]);
        assert_eq!(catalog.requests(), [300, 5]);

        // The bar marks the same page the header reports
        let tokens = listing.controller.tokens(2);
        assert_eq!(
            tokens.last(),
            Some(&PageToken::Page {
                number: 5,
                current: true
            })
        );
    }

    #[tokio::test]
    async fn test_listing_page_zero_and_empty_catalogue() {
        let catalog = CountingCatalog::new(23);
        let listing = fetch_listing(&catalog, pagination(), 0).await.unwrap();
        assert_eq!(listing.controller.current_page(), 1);
        assert_eq!(catalog.requests(), [1]);

        let empty = CountingCatalog::new(0);
        let listing = fetch_listing(&empty, pagination(), 4).await.unwrap();
        assert_eq!(listing.controller.current_page(), 1);
        assert_eq!(listing.controller.total_pages(), 0);
        assert!(listing.page.entries.is_empty());
        assert_eq!(empty.requests(), [4, 1]);
    }
}
