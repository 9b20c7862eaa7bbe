use std::io;

use enom::{Availability, Credentials, EnomClient, Environment};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let uid = required_env("ENOM_UID")?;
    let pw = required_env("ENOM_PW")?;
    let names_raw = required_env("ENOM_DOMAINS")?;

    let names = names_raw.split(',').map(str::trim).collect::<Vec<_>>();
    let client = EnomClient::new(Credentials::new(uid, pw)?, Environment::Test)?;

    match client.check(&names).await? {
        Availability::Single(available) => println!("{}: {available}", names[0]),
        Availability::Many(results) => {
            for (name, available) in results {
                println!("{name}: {available}");
            }
        }
    }

    Ok(())
}
