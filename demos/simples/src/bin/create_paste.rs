use std::sync::Arc;
use tinypaste_client::prelude::*;
use tracing::info;

struct Printer;

impl MessageReceiver for Printer {
    fn receive(&self, method: &str, payload: &str) -> bool {
        match method {
            DEFAULT_SUCCESS_METHOD => info!("Paste listing: {}", payload),
            DEFAULT_FAILURE_METHOD => info!("Listing failed: {}", payload),
            _ => return false,
        }
        true
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Credentials come from TINYPASTE_USERNAME / TINYPASTE_PASSWORD, if set
    let client = TinyPasteClient::from_env()?;
    info!("Using {}", client.endpoint(ApiMethod::Create));

    client
        .create(
            "Hello from Rust",
            "demo",
            CallbackTarget::direct(|body, error| match (body, error) {
                (Some(body), _) => info!("Created: {}", body),
                (_, Some(error)) => info!("Create failed: {}", error),
                _ => {}
            }),
        )
        .wait()
        .await;

    client.list(CallbackTarget::named(Arc::new(Printer))).wait().await;

    // No callback: failures are logged, successes dropped
    client.get("does-not-exist", CallbackTarget::Default).wait().await;

    Ok(())
}
