mod http;

pub use http::HttpSchedulerClient;
