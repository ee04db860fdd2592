use serde::{Deserialize, Deserializer};

/// One structured error from an API error payload (`{"error", "message"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl ResponseError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseTemplate {
    pub id: Option<String>,
    pub uri: Option<String>,
    pub version: Option<u32>,
}

/// Rendered message returned by a send call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseContent {
    pub body: Option<String>,
    pub subject: Option<String>,
    pub from_email: Option<String>,
    pub from_number: Option<String>,
}

/// Result of an email or SMS send.
///
/// The API answers with either the created notification or an `errors` array;
/// both shapes decode into this record. `status_code` is the HTTP status of
/// the call and is always set, so check it (or [`Response::is_success`])
/// before reading the notification fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Response {
    pub id: Option<String>,
    pub reference: Option<String>,
    pub content: Option<ResponseContent>,
    pub uri: Option<String>,
    pub template: Option<ResponseTemplate>,

    #[serde(skip)]
    pub status_code: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseError>,
}

impl Response {
    /// 2xx status and no `errors`.
    pub fn is_success(&self) -> bool {
        is_success(self.status_code, &self.errors)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulkJobApiKey {
    pub id: Option<String>,
    pub key_type: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulkJobCreator {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulkJobService {
    pub name: Option<String>,
}

/// Job created by a bulk send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BulkJob {
    pub id: Option<String>,
    pub job_status: Option<String>,
    pub notification_count: Option<u64>,
    pub original_file_name: Option<String>,
    pub template: Option<String>,
    pub template_version: Option<u32>,
    pub service: Option<String>,
    pub service_name: Option<BulkJobService>,
    pub sender_id: Option<String>,
    pub api_key: Option<BulkJobApiKey>,
    pub created_by: Option<BulkJobCreator>,
    #[serde(deserialize_with = "null_as_default")]
    pub archived: bool,
    pub scheduled_for: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub processing_started: Option<String>,
    pub processing_finished: Option<String>,
}

/// Result of a bulk email send; `data` holds the job on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BulkEmailResponse {
    pub data: Option<BulkJob>,

    #[serde(skip)]
    pub status_code: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseError>,
}

impl BulkEmailResponse {
    pub fn is_success(&self) -> bool {
        is_success(self.status_code, &self.errors)
    }
}

/// Delivery status of a single notification.
///
/// Timestamps are the RFC 3339 strings returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub id: Option<String>,
    pub reference: Option<String>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    #[serde(rename = "type")]
    pub notification_type: Option<String>,
    pub status: Option<String>,
    pub status_description: Option<String>,
    pub provider_response: Option<String>,
    pub template: Option<ResponseTemplate>,
    pub body: Option<String>,
    pub subject: Option<String>,
    pub created_at: Option<String>,
    pub created_by_name: Option<String>,
    pub sent_at: Option<String>,
    pub completed_at: Option<String>,

    #[serde(skip)]
    pub status_code: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseError>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        is_success(self.status_code, &self.errors)
    }
}

/// Pagination links of a status page. Both are fully-qualified URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Links {
    pub current: Option<String>,
    pub next: Option<String>,
}

/// One page of notification statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusResponses {
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<StatusResponse>,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,

    #[serde(skip)]
    pub status_code: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseError>,
}

impl StatusResponses {
    pub fn is_success(&self) -> bool {
        is_success(self.status_code, &self.errors)
    }

    /// `true` when the server returned a non-empty `next` link.
    pub fn has_next(&self) -> bool {
        self.next_link().is_some()
    }

    pub(crate) fn next_link(&self) -> Option<&str> {
        self.links.next.as_deref().filter(|next| !next.is_empty())
    }
}

fn is_success(status_code: u16, errors: &[ResponseError]) -> bool {
    (200..=299).contains(&status_code) && errors.is_empty()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
