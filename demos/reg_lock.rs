use std::io;

use enom::{Credentials, DomainName, EnomClient, Environment};

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
    let domain = std::env::var("ENOM_DOMAIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ENOM_DOMAIN environment variable is required",
        )
    })?;
    // "lock" or "unlock"; omit to only read the current state.
    let action = std::env::var("ENOM_LOCK_ACTION").ok();

    let domain = DomainName::parse(domain)?;
    let client = EnomClient::new(Credentials::new(uid, pw)?, Environment::Test)?;

    match action.as_deref() {
        Some("lock") => println!("status: {:?}", client.set_reg_lock(&domain, true).await?),
        Some("unlock") => println!("status: {:?}", client.set_reg_lock(&domain, false).await?),
        _ => println!("locked: {}", client.get_reg_lock(&domain).await?),
    }

    Ok(())
}
