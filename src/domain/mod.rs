//! Domain layer: request/response records and validated values (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{BulkEmail, Email, Sms, StatusQueryOptions};
pub use response::{
    BulkEmailResponse, BulkJob, BulkJobApiKey, BulkJobCreator, BulkJobService, Links, Response,
    ResponseContent, ResponseError, ResponseTemplate, StatusResponse, StatusResponses,
};
pub use validation::ValidationError;
pub use value::ApiKey;
