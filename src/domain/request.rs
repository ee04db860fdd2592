use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /v2/notifications/email`.
///
/// Optional fields left unset (or set to an empty value) are omitted from the
/// JSON body entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub email_address: String,
    pub template_id: String,

    #[serde(default, skip_serializing_if = "is_blank")]
    pub email_reply_to_id: Option<String>,
    /// Template substitutions. Values may be any JSON (strings, lists, file
    /// attachment objects).
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub personalisation: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub reference: Option<String>,
}

impl Email {
    pub fn new(email_address: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            template_id: template_id.into(),
            email_reply_to_id: None,
            personalisation: None,
            reference: None,
        }
    }

    /// Use a reply-to address registered on the service.
    pub fn with_reply_to_id(mut self, reply_to_id: impl Into<String>) -> Self {
        self.email_reply_to_id = Some(reply_to_id.into());
        self
    }

    /// Add one personalisation value, keeping previously added ones.
    pub fn with_personalisation(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.personalisation
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Request body for `POST /v2/notifications/sms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sms {
    /// Sent as-is; the API validates the number.
    pub phone_number: String,
    pub template_id: String,

    #[serde(default, skip_serializing_if = "is_blank")]
    pub sms_sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub personalisation: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub reference: Option<String>,
}

impl Sms {
    pub fn new(phone_number: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            template_id: template_id.into(),
            sms_sender_id: None,
            personalisation: None,
            reference: None,
        }
    }

    /// Use a sender registered on the service instead of the default one.
    pub fn with_sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.sms_sender_id = Some(sender_id.into());
        self
    }

    pub fn with_personalisation(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.personalisation
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Request body for `POST /v2/notifications/bulk`.
///
/// Recipients are given either as `rows` (the first row holds the column
/// names, e.g. `["email address", "name"]`) or as a raw `csv` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEmail {
    pub name: String,
    pub template_id: String,

    #[serde(default, skip_serializing_if = "is_empty_rows")]
    pub rows: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub csv: Option<String>,
    /// RFC 3339 timestamp; the job runs immediately when unset.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub scheduled_for: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub reply_to_id: Option<String>,
}

impl BulkEmail {
    pub fn new(name: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template_id: template_id.into(),
            rows: None,
            csv: None,
            scheduled_for: None,
            reply_to_id: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_csv(mut self, csv: impl Into<String>) -> Self {
        self.csv = Some(csv.into());
        self
    }

    pub fn with_scheduled_for(mut self, scheduled_for: impl Into<String>) -> Self {
        self.scheduled_for = Some(scheduled_for.into());
        self
    }

    pub fn with_reply_to_id(mut self, reply_to_id: impl Into<String>) -> Self {
        self.reply_to_id = Some(reply_to_id.into());
        self
    }
}

/// Filters for `GET /v2/notifications`.
///
/// Only non-empty filters end up in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusQueryOptions {
    /// Notification id cursor: only notifications older than this one.
    pub older_than: Option<String>,
    pub reference: Option<String>,
    /// A single status or a comma-separated list (e.g. `delivered,failed`).
    pub status: Option<String>,
    /// `email` or `sms`.
    pub template_type: Option<String>,
}

impl StatusQueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_older_than(mut self, older_than: impl Into<String>) -> Self {
        self.older_than = Some(older_than.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_template_type(mut self, template_type: impl Into<String>) -> Self {
        self.template_type = Some(template_type.into());
        self
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_empty_map<V>(value: &Option<BTreeMap<String, V>>) -> bool {
    value.as_ref().is_none_or(BTreeMap::is_empty)
}

fn is_empty_rows(value: &Option<Vec<Vec<String>>>) -> bool {
    value.as_ref().is_none_or(Vec::is_empty)
}
