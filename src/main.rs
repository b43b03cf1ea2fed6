use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use thiruppavai::core::config::{self, CliOverrides, LOG_FILE};
use thiruppavai::core::verse::Language;

#[derive(Parser)]
#[command(name = "thiruppavai", about = "Daily Thiruppavai verse viewer for the month of Margazhi")]
struct Args {
    /// Display language (saved as the new preference)
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Verse data file (JSON) to use instead of the bundled verses
    #[arg(long)]
    verses: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    // Prefer ~/.thiruppavai/, fall back to the current directory
    let path = config::app_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join(LOG_FILE))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE));

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging(args.verbose);

    log::info!("Thiruppavai starting up");

    let app_config = config::load_config().map_err(io::Error::other)?;
    let cli = CliOverrides {
        language: args.language,
        verses: args.verses,
        date: args.date,
    };
    let resolved = config::resolve(&app_config, &cli).map_err(io::Error::other)?;
    log::debug!("Resolved config: {:?}", resolved);

    thiruppavai::tui::run(resolved)
}
