pub mod profile_response;

pub use profile_response::{MeResponse, ProfileResponse, UserSummary};
