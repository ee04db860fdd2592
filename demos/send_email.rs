use std::io;

use gcnotify::{Email, NotifyClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("NOTIFY_API_KEY")?;
    let template_id = required_env("NOTIFY_EMAIL_TEMPLATE_ID")?;
    let address = required_env("NOTIFY_EMAIL_ADDRESS")?;

    let mut builder = NotifyClient::builder(api_key);
    if let Ok(host) = std::env::var("NOTIFY_HOST") {
        builder = builder.host(host);
    }
    let client = builder.build()?;

    let email = Email::new(address, template_id)
        .with_personalisation("name", "from the gcnotify demo")
        .with_reference("gcnotify-demo");
    let response = client.send_email(&email).await?;

    println!(
        "status_code: {}, id: {:?}, errors: {:?}",
        response.status_code, response.id, response.errors
    );

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
