//! # Yoga Studio CLI
//!
//! Administrator creation and demo data seeding for development databases.
//!
//! ## Usage
//!
//! ```ignore
//! use yogastudio_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(20); // 20 sessions with defaults
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
