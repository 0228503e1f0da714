use std::io;

use sendsay::{Credentials, MemberSet, QuestionnaireAnswers, SendsayClient};
use serde_json::json;

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
    let email = std::env::var("SENDSAY_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDSAY_EMAIL environment variable is required",
        )
    })?;
    let sublogin = std::env::var("SENDSAY_SUBLOGIN").unwrap_or_default();

    let client = SendsayClient::new(Credentials::new(login, sublogin, password)?);

    let mut request = MemberSet::new(email);
    if let Ok(name) = std::env::var("SENDSAY_FIRST_NAME") {
        request = request.data(json!({ "base": { "firstName": name } }));
    }

    let result = client.member_set(&QuestionnaireAnswers, request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
