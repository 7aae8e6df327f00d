//! # Yoga Studio Models
//!
//! Domain models and DTOs for the Yoga Studio API.
//!
//! # Modules
//!
//! - [`ids`]: typed identifiers for every table
//! - [`auth`]: login and registration payloads
//! - [`sessions`]: sessions and their attendee lists
//! - [`teachers`]: teachers leading sessions
//! - [`users`]: user accounts
//!
//! # Example
//!
//! ```ignore
//! use yogastudio_models::sessions::{Session, SessionDto};
//! use yogastudio_models::ids::UserId;
//!
//! fn is_participating(session: &Session, user: UserId) -> bool {
//!     session.users.contains(&user)
//! }
//! ```

pub mod auth;
pub mod ids;
pub mod sessions;
pub mod teachers;
pub mod users;

pub use auth::{Claims, JwtResponse, LoginRequest, MessageResponse, SignupRequest};
pub use ids::{SessionId, TeacherId, UserId};
pub use sessions::{Session, SessionDto};
pub use teachers::Teacher;
pub use users::User;
