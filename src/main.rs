mod api;
mod args;
mod commands;
mod config;
mod error;
mod models;
mod polls;
mod voting;

use api::ApiClient;
use args::Args;
use clap::Parser;
use config::Config;
use log::{error, info};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    // Token comes from the environment (or .env); nothing runs without it
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Using {} (v{}, {:?} between calls)",
        config.api_url, config.api_version, config.request_delay
    );

    let api = ApiClient::new(config);
    ExitCode::from(commands::run(&args, &api).await)
}
