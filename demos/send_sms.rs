use std::io;

use josms::{GatewayConfig, JoSmsClient};
use tracing_subscriber::EnvFilter;

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
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GatewayConfig::new(
        std::env::var("JOSMS_BASE_URL").unwrap_or_else(|_| "https://www.josms.net".to_owned()),
        required_env("JOSMS_ACCOUNT_NAME")?,
        required_env("JOSMS_ACCOUNT_PASSWORD")?,
        required_env("JOSMS_SENDER_ID")?,
    );
    let phone = required_env("JOSMS_PHONE")?;
    let message = std::env::var("JOSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the josms example.".to_owned());

    let client = JoSmsClient::new(config);
    let message_id = client.send(&phone, &message).await?;
    println!("message id: {message_id}");

    Ok(())
}
