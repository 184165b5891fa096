pub mod credentials;
pub mod parser;
pub mod schema;
pub mod types;

pub use types::*;
pub use credentials::{redact_credentials, resolve_credential};
pub use parser::{parse_config, parse_config_str};

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";
