// src/bin/ku-run-tests.rs

use clap::Parser;
use ku_release::cli::RunTestsArgs;
use ku_release::{logging, run_tests};

#[tokio::main]
async fn main() {
    let args = RunTestsArgs::parse();
    if let Err(err) = logging::init_logging(args.common.log_level) {
        eprintln!("ku-run-tests error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run_tests(args).await {
        eprintln!("ku-run-tests error: {err}");
        std::process::exit(err.exit_code());
    }
}
