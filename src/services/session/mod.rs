pub mod session_service;

pub use session_service::{extract_bearer_token, session_key, verify_with, SessionService};
