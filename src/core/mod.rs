pub mod config;
pub mod errors;
pub mod result_ext;

pub use config::ClientConfig;
pub use errors::ClientError;
pub use result_ext::ResultExt;
