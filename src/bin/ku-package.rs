// src/bin/ku-package.rs

use clap::Parser;
use ku_release::cli::PackageArgs;
use ku_release::{logging, run_package};

#[tokio::main]
async fn main() {
    let args = PackageArgs::parse();
    if let Err(err) = logging::init_logging(args.common.log_level) {
        eprintln!("ku-package error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run_package(args).await {
        eprintln!("ku-package error: {err}");
        std::process::exit(err.exit_code());
    }
}
