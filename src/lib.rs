//! Typed Rust client for the GC Notify notification API.
//!
//! The crate is split into a domain layer of request/response records, a
//! transport layer for wire-format details, and a small client layer that
//! issues authenticated requests.
//!
//! ```rust,no_run
//! use gcnotify::{Email, NotifyClient, StatusQueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gcnotify::NotifyError> {
//!     let client = NotifyClient::new("<72+ character API key>")?;
//!
//!     let email = Email::new("someone@example.com", "<template id>")
//!         .with_personalisation("name", "Jane");
//!     let response = client.send_email(&email).await?;
//!     if !response.is_success() {
//!         eprintln!("rejected ({}): {:?}", response.status_code, response.errors);
//!     }
//!
//!     let mut page = client
//!         .get_status(&StatusQueryOptions::new().with_template_type("email"))
//!         .await?;
//!     while page.has_next() {
//!         page = client.next_status_page(&page).await?;
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_HOST, DEFAULT_TIMEOUT, NotifyClient, NotifyClientBuilder, NotifyError, Operation,
};
pub use domain::{
    ApiKey, BulkEmail, BulkEmailResponse, BulkJob, BulkJobApiKey, BulkJobCreator,
    BulkJobService, Email, Links, Response, ResponseContent, ResponseError, ResponseTemplate, Sms,
    StatusQueryOptions, StatusResponse, StatusResponses, ValidationError,
};
