use anyhow::Result;
use clap::Parser;
use shared::{
    abstract_trait::HashingTrait,
    config::{DEFAULT_BCRYPT_COST, Hashing},
};

/// Print a bcrypt hash for inserting a user by hand.
#[derive(Debug, Parser)]
#[command(name = "hash-password")]
struct Args {
    #[arg(default_value = "password123")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let hashed = Hashing::new(DEFAULT_BCRYPT_COST).hash_password(&args.password).await?;

    println!("Password: {}", args.password);
    println!("Hash:     {hashed}");
    println!();
    println!("Example:");
    println!(
        "INSERT INTO users (username, password_hash, full_name, location) \
         VALUES ('admin', '{hashed}', 'Administrator', 'Not specified');"
    );

    Ok(())
}
