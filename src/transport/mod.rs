//! Transport layer: endpoint paths and wire-format details (serialization/deserialization).

mod body;
mod status;

pub use body::{ApiRecord, decode_response, encode_json_body};
pub use status::{encode_status_by_id_path, encode_status_query_path, next_page_path};

pub const EMAIL_PATH: &str = "/v2/notifications/email";
pub const SMS_PATH: &str = "/v2/notifications/sms";
pub const BULK_PATH: &str = "/v2/notifications/bulk";
pub const NOTIFICATIONS_PATH: &str = "/v2/notifications";
