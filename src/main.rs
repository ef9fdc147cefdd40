use clap::Parser;
use permsync::core::Mode;
use permsync::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "permsync", about = "Terminal editor for allowed and blacklisted permission rules")]
struct Args {
    /// Directory holding allowed.json and blacklist.json
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// List to show first
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Config is read before the logger exists, so its outcome is logged afterwards.
    let (config, config_outcome) = match config::load_config() {
        Ok((config, source)) => (config, Ok(source)),
        Err(e) => {
            eprintln!("permsync: {e}; using defaults");
            (Default::default(), Err(e.to_string()))
        }
    };
    let resolved = config::resolve(
        &config,
        &CliOverrides {
            data_dir: args.dir,
            start_mode: args.mode,
            log_file: args.log_file,
        },
    );

    // Initialize file logger - the TUI owns the terminal, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match config_outcome {
        Ok(source) => source.log(),
        Err(error) => log::warn!("Ignoring config file: {}", error),
    }
    log::info!("Permsync starting up: {:?}", resolved);

    permsync::tui::run(&resolved)
}
