//! Command-line front end: saved page in, JSON out.
//!
//! ```text
//! forum-extract posts --platform phpbb topic.html -o phpbb.json
//! forum-extract select topic.html --class content
//! curl -s "$URL" | forum-extract select - --tag p --class author --raw
//! ```

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use forum_extract::encoding::{read_html, read_html_file};
use forum_extract::output::{write_posts, write_posts_to_file, write_strings};
use forum_extract::{extract_by_tag, ExtractOptions, Platform};

#[derive(Parser)]
#[command(name = "forum-extract", version, about = "Extract posts from saved forum pages")]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract all posts from a topic page as JSON records
    Posts {
        /// Forum software that rendered the page
        #[arg(short, long, value_enum)]
        platform: PlatformArg,

        /// Saved HTML page, or `-` for stdin
        page: PathBuf,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract the inner content of every element matching a class or id
    Select(SelectArgs),
}

#[derive(Args)]
struct SelectArgs {
    /// Saved HTML page, or `-` for stdin
    page: PathBuf,

    /// Tag name of the elements to extract
    #[arg(short, long, default_value = "div")]
    tag: String,

    /// Exact class attribute value
    #[arg(short, long, conflicts_with = "id", required_unless_present = "id")]
    class: Option<String>,

    /// Exact id attribute value
    #[arg(short, long)]
    id: Option<String>,

    /// Keep inner HTML instead of cleaning it to text
    #[arg(long)]
    raw: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlatformArg {
    Phpbb,
    Vbulletin,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Phpbb => Self::PhpBb,
            PlatformArg::Vbulletin => Self::VBulletin,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "forum_extract=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_page(page: &Path) -> Result<String> {
    if page == Path::new("-") {
        read_html(io::stdin().lock()).context("failed to read page from stdin")
    } else {
        read_html_file(page).with_context(|| format!("failed to read {}", page.display()))
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Posts {
            platform,
            page,
            output,
        } => {
            let platform = Platform::from(platform);
            let html = load_page(&page)?;
            let posts = platform.extract_posts(&html).with_context(|| {
                format!("failed to extract {platform} posts from {}", page.display())
            })?;

            match output {
                Some(path) => write_posts_to_file(&path, &posts)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => write_posts(io::stdout().lock(), &posts)?,
            }
            eprintln!("Extracted {} posts.", posts.len());
        }
        Command::Select(args) => {
            let html = load_page(&args.page)?;
            let options = ExtractOptions {
                tag: args.tag,
                class_name: args.class,
                id_name: args.id,
                remove_html: !args.raw,
            };
            let items = extract_by_tag(&html, &options)
                .with_context(|| format!("failed to extract from {}", args.page.display()))?;
            write_strings(io::stdout().lock(), &items)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
