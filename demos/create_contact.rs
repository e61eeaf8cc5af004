use std::io;

use smsgatewayme::{Credentials, GatewayClient};

fn required_var(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = required_var("SMSGATEWAY_EMAIL")?;
    let password = required_var("SMSGATEWAY_PASSWORD")?;
    let name = required_var("SMSGATEWAY_CONTACT_NAME")?;
    let number = required_var("SMSGATEWAY_CONTACT_NUMBER")?;

    let client = GatewayClient::new(Credentials::new(email, password)?);
    let result = client.request().contact(name, number).create().await?;

    println!("status: {}", result.status);
    match result.json() {
        Some(body) => println!("response: {body}"),
        None => println!("raw response: {:?}", result.raw()),
    }

    Ok(())
}
