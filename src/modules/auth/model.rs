pub use yogastudio_models::auth::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};
use yogastudio_models::users::User;

pub const REGISTERED_MESSAGE: &str = "User registered successfully!";
pub const EMAIL_TAKEN_MESSAGE: &str = "Error: Email is already taken!";

/// Result of a registration attempt. A taken email is an expected outcome
/// answered with a message body rather than an error.
#[derive(Debug)]
pub enum RegisterOutcome {
    Registered(User),
    EmailTaken,
}
