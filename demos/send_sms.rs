use std::io;

use gcnotify::{NotifyClient, Sms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("NOTIFY_API_KEY")?;
    let template_id = required_env("NOTIFY_SMS_TEMPLATE_ID")?;
    let phone_number = required_env("NOTIFY_PHONE_NUMBER")?;

    let mut builder = NotifyClient::builder(api_key);
    if let Ok(host) = std::env::var("NOTIFY_HOST") {
        builder = builder.host(host);
    }
    let client = builder.build()?;

    let mut sms = Sms::new(phone_number, template_id);
    if let Ok(sender_id) = std::env::var("NOTIFY_SMS_SENDER_ID") {
        sms = sms.with_sender_id(sender_id);
    }

    let response = client.send_sms(&sms).await?;
    if response.is_success() {
        println!("sent sms {:?}", response.id);
    } else {
        println!(
            "rejected with {}: {:?}",
            response.status_code, response.errors
        );
    }

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
