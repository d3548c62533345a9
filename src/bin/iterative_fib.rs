//! Print F(0) through F(49) by accumulation.

use anyhow::Result;
use classic_algos::demo::{fibonacci_demo, LONG_RUN};
use classic_algos::fibonacci::IterativeFibonacci;
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
    fibonacci_demo(
        &mut std::io::stdout().lock(),
        &IterativeFibonacci,
        LONG_RUN,
        Layout::SpaceSeparated,
    )
}
