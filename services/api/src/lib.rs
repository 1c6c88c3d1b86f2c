mod cli;
mod demo;
mod guide;
mod infra;
mod routes;
mod server;

use deed_guidance::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
