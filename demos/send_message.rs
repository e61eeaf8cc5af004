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
    let number = required_var("SMSGATEWAY_NUMBER")?;
    let message = std::env::var("SMSGATEWAY_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsgatewayme demo.".to_owned());

    let mut builder = GatewayClient::builder(Credentials::new(email, password)?);
    if let Ok(device) = std::env::var("SMSGATEWAY_DEVICE") {
        builder = builder.device(smsgatewayme::DeviceId::new(device.parse()?));
    }
    let client = builder.build()?;

    let result = client
        .request()
        .to(number)
        .message(message)
        .send()
        .await?;

    println!("status: {}", result.status);
    match result.json() {
        Some(body) => println!("response: {body}"),
        None => println!("raw response: {:?}", result.raw()),
    }

    Ok(())
}
