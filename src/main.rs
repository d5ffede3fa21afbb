//! hdfs-classify - Entry Point
//!
//! Classifies recorded HDFS remote failures and prints the local error each
//! one surfaces as.

use log::{error, info};

use hdfs_remote_errors::config::ReplayConfig;
use hdfs_remote_errors::replay::{format_entry, replay, summarize};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "replay".to_string());
    info!("Loading recorded failures from {}", path);

    let config = match ReplayConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let entries = replay(&config);
    for entry in &entries {
        println!("{}", format_entry(entry, config.show_message));
    }

    let summary = summarize(&entries);
    info!(
        "Classified {} failures: {} translated, {} passed through",
        entries.len(),
        summary.translated,
        summary.passthrough
    );
}
