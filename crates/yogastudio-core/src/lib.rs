//! # Yoga Studio Core
//!
//! Core types, errors, and utilities for the Yoga Studio API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`serde`]: Custom serde helpers for the client's wire format
//!
//! # Example
//!
//! ```ignore
//! use yogastudio_core::errors::AppError;
//! use yogastudio_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Session not found"));
//! let hash = hash_password("test!1234")?;
//! ```

pub mod errors;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use password::{hash_password, verify_password};
