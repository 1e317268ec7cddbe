use std::process;

use clap::Parser;

use fieldlog::cli::{self, Cli};
use fieldlog::config::Config;
use fieldlog::storage::FileStore;
use fieldlog::tracker::MissionTracker;

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let root = config
        .data_dir
        .clone()
        .or_else(FileStore::default_root)
        .unwrap_or_else(|| {
            eprintln!("Could not determine home directory.");
            process::exit(1);
        });

    let store = match FileStore::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    let mut tracker = match MissionTracker::load(store, config.tracker_settings()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to load mission state: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(cli, &mut tracker) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
