use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use shared::{
    abstract_trait::{DynHashing, UserCommandServiceTrait},
    config::{Config, ConnectionManager, DEFAULT_BCRYPT_COST, Hashing},
    domain::requests::CreateUserRequest,
    errors::ServiceError,
    repository::UserRepository,
    service::UserService,
    utils::init_logger,
};
use std::{process::ExitCode, sync::Arc};
use tracing::error;

/// Provision a login account for the price list.
#[derive(Debug, Parser)]
#[command(name = "create-user")]
struct Args {
    username: String,
    password: String,
    /// Defaults to the username.
    full_name: Option<String>,
    #[arg(default_value = "Not specified")]
    location: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let _log_guard = init_logger("create-user", false, false);

    let args = Args::parse();

    let pool = ConnectionManager::new_pool(&Config::database_url_from_env(), 1, 1)
        .await
        .context("Failed to connect to database")?;

    let cost = std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_BCRYPT_COST);
    let hash = Arc::new(Hashing::new(cost)) as DynHashing;
    let users = UserRepository::new(pool);
    let service = UserService::new(hash, users.query, users.command);

    let request = CreateUserRequest {
        full_name: args.full_name.unwrap_or_else(|| args.username.clone()),
        username: args.username,
        password: args.password,
        location: args.location,
    };

    match service.create_user(&request).await {
        Ok(user) => {
            println!("User created successfully:");
            println!("  ID:        {}", user.id);
            println!("  Username:  {}", user.username);
            println!("  Full name: {}", user.full_name);
            println!("  Location:  {}", user.location);
            Ok(ExitCode::SUCCESS)
        }
        Err(ServiceError::DuplicateUsername(_)) => {
            eprintln!("Username already exists");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            error!("❌ Failed to create user: {err}");
            eprintln!("Error creating user: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
