use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tabshop::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "tabshop", about = "Browse a product catalog by category")]
struct Args {
    /// Catalog API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Columns the category strip scrolls per key press
    #[arg(long)]
    scroll_step: Option<u16>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            config::TabshopConfig::default()
        }
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        scroll_step: args.scroll_step,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("tabshop starting up with catalog at {}", resolved.base_url);

    tabshop::tui::run(resolved)
}
