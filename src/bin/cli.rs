//! Reading List CLI
//!
//! Loads the reading list CSVs and prints, exports or renders the filtered view.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reading_list::{
    error::Result,
    models::{Config, Decade, LoadState, LoadStats, ReadingList, Snapshot},
    pipeline,
    render::{OutputFormat, export, html, table},
    services::{
        Action, Facets, Tab, ViewState,
        view::{visible_articles, visible_books},
    },
};

/// reading-list - Personal reading list viewer
#[derive(Parser, Debug)]
#[command(name = "reading-list", version, about = "Filter and render a CSV reading list")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "reading-list.toml")]
    config: PathBuf,

    /// Override the source directory or base URL
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List articles
    Articles {
        /// Only articles by this author
        #[arg(long)]
        author: Option<String>,

        /// table, json or csv
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List books
    Books {
        #[command(flatten)]
        filters: BookFilterArgs,

        /// table, json or csv
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the values available for each filter
    Facets {
        /// Rating snapshot used for rating buckets
        #[arg(long, default_value = "first")]
        snapshot: Snapshot,
    },

    /// Write the reading page as standalone HTML
    Render {
        /// Output file
        #[arg(short, long, default_value = "reading.html")]
        out: PathBuf,

        /// Show the books tab instead of articles
        #[arg(long)]
        books: bool,

        /// Open the quote panel of the book at this index
        #[arg(long)]
        quote: Option<usize>,

        #[command(flatten)]
        filters: BookFilterArgs,
    },

    /// Validate configuration
    Validate,

    /// Show source locations and record counts
    Info,
}

/// Filter dimensions shared by the book commands.
#[derive(Args, Debug, Default)]
struct BookFilterArgs {
    /// Only books by this author
    #[arg(long)]
    author: Option<String>,

    /// Publication decade, e.g. 1990s
    #[arg(long)]
    decade: Option<Decade>,

    /// Year the book was read
    #[arg(long)]
    year_read: Option<String>,

    /// Whole-star rating bucket (0-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    rating: Option<u8>,

    /// Rating snapshot: first or eoy
    #[arg(long, default_value = "first")]
    snapshot: Snapshot,
}

impl BookFilterArgs {
    /// Selections as reducer actions, applied in order.
    fn actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::SetSnapshot(self.snapshot)];
        if let Some(author) = &self.author {
            actions.push(Action::ToggleAuthor(author.clone()));
        }
        if let Some(decade) = self.decade {
            actions.push(Action::ToggleDecade(decade));
        }
        if let Some(year) = &self.year_read {
            actions.push(Action::ToggleYearRead(year.clone()));
        }
        if let Some(stars) = self.rating {
            actions.push(Action::ToggleRating(stars));
        }
        actions
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(source) = cli.source {
        config.source.base = source;
    }
    let options = table::TableOptions {
        max_width: config.display.max_width,
    };

    match cli.command {
        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("Source: {}", config.source.base);
            log::info!("Column layout: {:?}", config.mapping.layout);
        }

        Command::Articles { author, format } => {
            let (list, _) = pipeline::run_load(&config).await?;
            let state = ViewState::from_actions(author.map(Action::ToggleAuthor));
            let rows = visible_articles(&state, &list.articles);
            match format {
                OutputFormat::Table => println!("{}", table::article_table(&rows, options)),
                OutputFormat::Json => print_json(&rows)?,
                OutputFormat::Csv => print!("{}", export::articles_csv(&rows)),
            }
            log::info!("{} of {} articles shown", rows.len(), list.articles.len());
        }

        Command::Books { filters, format } => {
            let (list, _) = pipeline::run_load(&config).await?;
            let state = ViewState::from_actions(filters.actions());
            let rows = visible_books(&state, &list.books);
            match format {
                OutputFormat::Table => {
                    println!("{}", table::book_table(&rows, state.snapshot, options))
                }
                OutputFormat::Json => print_json(&rows)?,
                OutputFormat::Csv => print!("{}", export::books_csv(&rows)),
            }
            log::info!("{} of {} books shown", rows.len(), list.books.len());
        }

        Command::Facets { snapshot } => {
            let (list, _) = pipeline::run_load(&config).await?;
            print_json(&serde_json::json!({
                "articles": Facets::for_articles(&list.articles),
                "books": Facets::for_books(&list.books, snapshot),
            }))?;
        }

        Command::Render {
            out,
            books,
            quote,
            filters,
        } => {
            let tab = if books { Tab::Books } else { Tab::Articles };
            let mut actions = vec![Action::SelectTab(tab)];
            actions.extend(filters.actions());
            actions.extend(quote.map(Action::ToggleQuote));
            let state = ViewState::from_actions(actions);

            let (list, _) = pipeline::run_load(&config).await?;
            let page = html::render_page(&LoadState::Ready(list), &state, &config.display);
            tokio::fs::write(&out, page).await?;
            log::info!("Page written to {}", out.display());
        }

        Command::Info => {
            let (list, stats) = pipeline::run_load(&config).await?;
            print_info(&config, &list, &stats)?;
        }
    }

    Ok(())
}

fn print_info(config: &Config, list: &ReadingList, stats: &LoadStats) -> Result<()> {
    log::info!("Source: {}", config.source.base);
    log::info!("Articles: {} ({})", list.articles.len(), config.source.articles);
    log::info!("Books: {} ({})", list.books.len(), config.source.books);

    let rerated = list.books.iter().filter(|b| b.rating_eoy.is_some()).count();
    let quoted = list.books.iter().filter(|b| b.quote.is_some()).count();
    log::info!("Books re-rated at end of year: {}", rerated);
    log::info!("Books with a quote: {}", quoted);

    print_json(stats)
}
