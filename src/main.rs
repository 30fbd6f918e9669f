use anyhow::Result;
use clap::Parser;

use pattern_lock::{app, logging, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        logging::init(path, args.verbose.log_level_filter())?;
    }
    log::info!("starting, seed {:?}", args.seed);
    app::run(&args)
}
