use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verse_memory::app::{App, format_date};
use verse_memory::config::{Config, DEFAULT_LOG_FILTER};
use verse_memory::models::books::{BOOKS, Testament};
use verse_memory::{MemorizedItem, Quality};

#[derive(Parser)]
#[command(name = "verses")]
#[command(about = "Memorize scripture with spaced repetition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a verse to the memory collection, e.g. "John 3:16"
    Add {
        reference: String,
        /// Verse text (looked up in the bundled bible when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },
    /// List every memory verse
    List,
    /// List verses due for review
    Due,
    /// Review due verses interactively
    Review,
    /// Grade one verse: hard, good, easy or 0-5
    Grade { id: String, grade: String },
    /// Remove a verse from the collection
    Remove { id: String },
    /// Export the collection as JSON
    Export { path: PathBuf },
    /// Import a JSON export
    Import {
        path: PathBuf,
        /// Replace the collection instead of merging
        #[arg(long)]
        replace: bool,
    },
    /// Move the review clock forward one day
    AdvanceDay,
    /// List the books of the Bible
    Books,
}

fn print_item(item: &MemorizedItem) {
    println!(
        "{}  {:<22} reviews: {:<3} interval: {:>4}d  next: {}",
        item.id,
        item.reference.to_string(),
        item.review_count,
        item.interval,
        format_date(item.next_review)
    );
}

fn print_books() {
    for testament in [Testament::Old, Testament::New] {
        for book in BOOKS.iter().filter(|b| b.testament == testament) {
            println!("{:<16} {:<8} {:>3} chapters", book.name, book.abbr, book.chapters);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Commands::Books = cli.command {
        print_books();
        return Ok(());
    }

    let config = Config::load()?;
    let mut app = App::open(&config)?;

    match cli.command {
        Commands::Books => print_books(),
        Commands::Add { reference, text } => {
            let item = app.add_verse(&reference, text)?;
            println!("Added {} ({})", item.reference, item.id);
        }
        Commands::List => {
            let collection = app.collection()?;
            let summary = collection.summary(app.now()?);
            println!("{} verses · {} due for review", summary.total, summary.due);
            for item in collection.items() {
                print_item(item);
            }
        }
        Commands::Due => {
            for item in app.due()? {
                print_item(&item);
            }
        }
        Commands::Review => {
            let stdin = io::stdin();
            app.run_review(stdin.lock(), io::stdout())?;
        }
        Commands::Grade { id, grade } => {
            let quality: Quality = grade.parse()?;
            let item = app.grade_verse(&id, quality)?;
            println!(
                "{} graded {}: next review in {} day(s), on {}",
                item.reference,
                quality,
                item.interval,
                format_date(item.next_review)
            );
        }
        Commands::Remove { id } => {
            app.remove_verse(&id)?;
            println!("Removed {}", id);
        }
        Commands::Export { path } => {
            let count = app.export(&path)?;
            println!("Exported {} verses to '{}'", count, path.display());
        }
        Commands::Import { path, replace } => {
            let count = app.import(&path, replace)?;
            println!("Imported {} verses from '{}'", count, path.display());
        }
        Commands::AdvanceDay => {
            let offset = app.advance_day()?;
            println!("Review clock is now {} day(s) ahead", offset);
        }
    }

    Ok(())
}
