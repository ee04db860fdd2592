use std::io;

use futures::StreamExt;
use gcnotify::{NotifyClient, StatusQueryOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("NOTIFY_API_KEY")?;
    let template_type =
        std::env::var("NOTIFY_TEMPLATE_TYPE").unwrap_or_else(|_| "email".to_owned());

    let mut builder = NotifyClient::builder(api_key);
    if let Ok(host) = std::env::var("NOTIFY_HOST") {
        builder = builder.host(host);
    }
    let client = builder.build()?;

    let options = StatusQueryOptions::new().with_template_type(template_type);

    let mut pages = std::pin::pin!(client.status_pages(&options));
    while let Some(page) = pages.next().await {
        let page = page?;
        for notification in &page.notifications {
            println!(
                "{:?} {:?} {:?}",
                notification.id, notification.status, notification.created_at
            );
        }
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
