use std::io;

use sendsay::{Credentials, SendsayClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sendsay=info".into()),
        )
        .init();

    let login = std::env::var("SENDSAY_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDSAY_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("SENDSAY_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDSAY_PASSWORD environment variable is required",
        )
    })?;
    let sublogin = std::env::var("SENDSAY_SUBLOGIN").unwrap_or_default();

    let client = SendsayClient::builder(Credentials::new(login, sublogin, password)?)
        .verbose(std::env::var_os("SENDSAY_VERBOSE").is_some())
        .build()?;

    let result = client.group_list().await?;
    match result.get("list").and_then(|list| list.as_array()) {
        Some(groups) => {
            for group in groups {
                println!(
                    "{}\t{}",
                    group["id"].as_str().unwrap_or("?"),
                    group["name"].as_str().unwrap_or("")
                );
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
