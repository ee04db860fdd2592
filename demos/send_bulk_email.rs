use std::io;

use gcnotify::{BulkEmail, NotifyClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("NOTIFY_API_KEY")?;
    let template_id = required_env("NOTIFY_EMAIL_TEMPLATE_ID")?;
    let recipients = std::env::var("NOTIFY_BULK_RECIPIENTS")
        .unwrap_or_else(|_| "simulate-delivered@notification.canada.ca".to_owned());

    let mut rows = vec![vec!["email address".to_owned()]];
    rows.extend(
        recipients
            .split(',')
            .map(|address| vec![address.trim().to_owned()]),
    );

    let mut builder = NotifyClient::builder(api_key);
    if let Ok(host) = std::env::var("NOTIFY_HOST") {
        builder = builder.host(host);
    }
    let client = builder.build()?;

    let bulk = BulkEmail::new("gcnotify demo job", template_id).with_rows(rows);
    let response = client.send_bulk_email(&bulk).await?;

    match response.data {
        Some(job) => println!(
            "job {:?}: {:?} ({:?} notifications)",
            job.id, job.job_status, job.notification_count
        ),
        None => println!(
            "rejected with {}: {:?}",
            response.status_code, response.errors
        ),
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
