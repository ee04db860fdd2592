use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{BulkEmailResponse, Response, StatusResponse, StatusResponses};

/// Response record decoded from a JSON body that carries the HTTP status
/// of the call alongside whatever the body contained.
pub trait ApiRecord: DeserializeOwned + Default {
    fn set_status_code(&mut self, status: u16);
}

impl ApiRecord for Response {
    fn set_status_code(&mut self, status: u16) {
        self.status_code = status;
    }
}

impl ApiRecord for BulkEmailResponse {
    fn set_status_code(&mut self, status: u16) {
        self.status_code = status;
    }
}

impl ApiRecord for StatusResponse {
    fn set_status_code(&mut self, status: u16) {
        self.status_code = status;
    }
}

impl ApiRecord for StatusResponses {
    fn set_status_code(&mut self, status: u16) {
        self.status_code = status;
    }
}

pub fn encode_json_body<T: Serialize>(request: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(request)
}

/// Decode `body` into `R` and attach `status`.
///
/// An empty body (e.g. a bare 5xx from a proxy) yields `R::default()` with
/// only the status set.
pub fn decode_response<R: ApiRecord>(status: u16, body: &str) -> Result<R, serde_json::Error> {
    let mut record = if body.trim().is_empty() {
        R::default()
    } else {
        serde_json::from_str::<R>(body)?
    };
    record.set_status_code(status);
    Ok(record)
}
