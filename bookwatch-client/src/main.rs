use bookwatch_client::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), bookwatch_client::AppError> {
    run(Cli::parse()).await
}
