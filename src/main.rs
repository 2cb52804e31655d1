use std::process::ExitCode;

use clap::Parser;

use storia::cli::{self, Cli};
use storia::trace;

#[tokio::main]
async fn main() -> ExitCode {
    trace::init_tracing();

    let cli = Cli::parse();
    match cli::run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
