use fixture_runner::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // `{:#}` prints the whole context chain, not just the outermost
            // message, so loader errors keep their cause.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
