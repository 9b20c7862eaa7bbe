use std::io;

use enom::{Credentials, EnomClient, Environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let uid = std::env::var("ENOM_UID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ENOM_UID environment variable is required",
        )
    })?;
    let pw = std::env::var("ENOM_PW").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ENOM_PW environment variable is required",
        )
    })?;

    let client = EnomClient::new(Credentials::new(uid, pw)?, Environment::Test)?;
    let balance = client.get_balance().await?;

    println!(
        "balance: {:.2}, available: {:.2}",
        balance.balance, balance.available
    );

    Ok(())
}
