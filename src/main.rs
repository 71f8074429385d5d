mod cli;
mod config;
mod db;
mod error;
mod logging;
mod models;

use clap::Parser;
use cli::{App, Cli, Terminal};
use colored::*;
use config::Config;
use db::RedisStore;
use error::Result;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize logging
    let log = logging::init(&config.log_dir, env!("CARGO_PKG_NAME"));

    println!(
        "This is a tool to manage lists stored in Redis, version {}",
        env!("CARGO_PKG_VERSION")
    );
    if let Ok(exe) = std::env::current_exe() {
        println!("Running from: {}", exe.display());
    }
    println!("The time now is {}", chrono::Local::now().format("%c"));
    if let Some(file) = &log.file {
        println!("Logs saved to {}", file.display());
    }

    info!("Starting with arguments {:?}", cli.args);

    let store = match RedisStore::connect(&config.redis_url).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to connect to {}: {:?}", config.redis_url, e);
            println!(
                "{}",
                "Error: Failed to connect to the list store. Check logs.".red()
            );
            return Err(e);
        },
    };

    let mut app = App::new(store, Terminal, cli.args);
    let app_name = app.app_name().await?;
    println!("\nWelcome to {}", app_name.cyan().bold());

    if app.run().await.is_err() {
        // The failure has already been reported on the console.
        drop(log);
        std::process::exit(1);
    }

    Ok(())
}
