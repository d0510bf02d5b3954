use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use werkbar::core::config::{self, CliOverrides};
use werkbar::tui;

#[derive(Parser)]
#[command(name = "werkbar", about = "Catalog navigation bar for a sheet-music viewer")]
struct Args {
    /// Page URL to navigate over
    #[arg(short, long)]
    url: Option<String>,

    /// Work to start on, as a werk parameter value (e.g. "1006")
    #[arg(short, long)]
    werk: Option<String>,

    /// Catalog document URL (defaults to bwvs.json next to the page)
    #[arg(long)]
    catalog_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to werkbar.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("werkbar.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("werkbar: {e}");
            std::process::exit(2);
        }
    };

    let cli = CliOverrides {
        url: args.url.as_deref(),
        werk: args.werk.as_deref(),
        catalog_url: args.catalog_url.as_deref(),
    };
    let resolved = match config::resolve(&file_config, cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("werkbar: {e}");
            std::process::exit(2);
        }
    };

    log::info!(
        "Werkbar starting up at {} (catalog: {})",
        resolved.page_location,
        resolved.catalog_url
    );

    tui::run(resolved)
}
