pub mod http_channel;

pub use http_channel::HttpSubmissionChannel;
