//! Attendance of users in sessions, stored in the `participate` join table.

pub mod controller;
pub mod router;
pub mod service;

pub use router::init_participation_router;
