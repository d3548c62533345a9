//! Bubble sort [5, 1, 4, 2, 8] and print it space-separated.

use anyhow::Result;
use classic_algos::demo::sort_demo;
use classic_algos::logging;
use classic_algos::render::Layout;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    sort_demo(&mut std::io::stdout().lock(), Layout::SpaceSeparated)
}
