use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use musicalitos::{render_file_to_document, Locale, PageConfig};

/// Render a song catalog into a static Musicalitos page.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Catalog file (JSON array of songs)
    catalog: PathBuf,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language of the page chrome (en, es)
    #[arg(short, long, default_value_t = Locale::En)]
    locale: Locale,

    /// Document title and heading
    #[arg(long, default_value = "Musicalitos")]
    title: String,

    /// Stylesheet linked from the page
    #[arg(long, default_value = "style.css")]
    stylesheet: String,

    /// Catalog URL the browser binding fetches when the page is not prerendered
    #[arg(long, default_value = "songs.json")]
    catalog_url: String,

    /// Module script with the browser binding; makes the page interactive
    #[arg(long)]
    script: Option<String>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = PageConfig {
        locale: args.locale,
        title: args.title,
        catalog_url: args.catalog_url,
        stylesheet: args.stylesheet,
        script: args.script,
    };

    let html = match render_file_to_document(&args.catalog, &config) {
        Ok(html) => html,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &html) {
                error!("Error writing to '{}': {e}", path.display());
                process::exit(1);
            }
            info!("Wrote page to {}", path.display());
        }
        None => print!("{html}"),
    }
}
