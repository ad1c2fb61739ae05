pub mod create_dataset_request;
pub mod dataset_response;
pub mod datasets;
pub mod record_request;
pub mod record_response;
