//! Feature modules. Each has a `controller` (handlers), a `service`
//! (queries and rules) and a `router`.

pub mod auth;
pub mod participation;
pub mod sessions;
pub mod teachers;
pub mod users;
