pub mod post_request;
pub mod request_log;
