use std::io;

use smsgatewayme::{Credentials, GatewayClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = std::env::var("SMSGATEWAY_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGATEWAY_EMAIL environment variable is required",
        )
    })?;
    let password = std::env::var("SMSGATEWAY_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGATEWAY_PASSWORD environment variable is required",
        )
    })?;
    let page = std::env::var("SMSGATEWAY_PAGE")
        .ok()
        .map(|value| value.parse::<u32>())
        .transpose()?
        .unwrap_or(1);

    let client = GatewayClient::new(Credentials::new(email, password)?);
    let result = client.request().devices().page(page).get().await?;

    println!("status: {}", result.status);
    match result.json() {
        Some(body) => println!("devices: {body}"),
        None => println!("raw response: {:?}", result.raw()),
    }

    Ok(())
}
