use std::io;

use josms::{GatewayConfig, JoSmsClient, SEND_BULK_MAX_RECIPIENTS};
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

    let request_timeout = std::env::var("JOSMS_REQUEST_TIMEOUT")
        .ok()
        .map(|value| value.parse::<u32>())
        .transpose()?
        .unwrap_or(30);
    let config = GatewayConfig::new(
        std::env::var("JOSMS_BASE_URL").unwrap_or_else(|_| "https://www.josms.net".to_owned()),
        required_env("JOSMS_ACCOUNT_NAME")?,
        required_env("JOSMS_ACCOUNT_PASSWORD")?,
        required_env("JOSMS_SENDER_ID")?,
    )
    .with_request_timeout(request_timeout);

    // Comma-separated list, e.g. "962790000001,962790000002".
    let phones = required_env("JOSMS_PHONES")?
        .split(',')
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let message = std::env::var("JOSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the josms example.".to_owned());

    let client = JoSmsClient::new(config);
    for chunk in phones.chunks(SEND_BULK_MAX_RECIPIENTS) {
        let message_id = client.send_bulk(chunk, &message).await?;
        println!("{} recipients, message id: {message_id}", chunk.len());
    }

    Ok(())
}
