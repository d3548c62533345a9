//! Print F(0) through F(49) by recursion. Exponential: the last few terms take a while.

use anyhow::Result;
use classic_algos::demo::{fibonacci_demo, LONG_RUN};
use classic_algos::fibonacci::RecursiveFibonacci;
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
        &RecursiveFibonacci,
        LONG_RUN,
        Layout::SpaceSeparated,
    )
}
