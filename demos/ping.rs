use std::io;

use sendsay::{Credentials, SendsayClient};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sendsay=info".into()),
        )
        .init();

    let login = required("SENDSAY_LOGIN")?;
    let sublogin = std::env::var("SENDSAY_SUBLOGIN").unwrap_or_default();
    let password = required("SENDSAY_PASSWORD")?;

    let client = SendsayClient::new(Credentials::new(login, sublogin, password)?);

    println!("ping: {}", client.ping().await?);
    println!("pong: {}", client.pong().await?);
    Ok(())
}
