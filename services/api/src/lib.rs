mod cli;
mod infra;
mod report;
mod routes;
mod server;

use energy_profile::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
