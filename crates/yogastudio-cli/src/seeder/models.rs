//! Seed records and seeding configuration.

use chrono::{DateTime, Utc};
use yogastudio_models::{SessionId, TeacherId, UserId};

pub struct TeacherSeed {
    pub first_name: String,
    pub last_name: String,
}

pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

pub struct SessionSeed {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub teacher_id: TeacherId,
}

/// One (session, user) row of the attendance table.
pub type Attendance = (SessionId, UserId);

/// How much demo data `seed_all` produces.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub num_sessions: usize,
    pub num_teachers: usize,
    pub num_users: usize,
    /// Upper bound on attendees drawn for each session.
    pub max_attendees: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_sessions: 20,
            num_teachers: 5,
            num_users: 50,
            max_attendees: 12,
        }
    }
}

impl SeedConfig {
    pub fn new(num_sessions: usize) -> Self {
        Self {
            num_sessions,
            ..Default::default()
        }
    }

    pub fn with_teachers(mut self, num_teachers: usize) -> Self {
        self.num_teachers = num_teachers;
        self
    }

    pub fn with_users(mut self, num_users: usize) -> Self {
        self.num_users = num_users;
        self
    }

    pub fn with_max_attendees(mut self, max_attendees: usize) -> Self {
        self.max_attendees = max_attendees;
        self
    }
}
