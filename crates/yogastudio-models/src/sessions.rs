//! Session domain models and DTOs.
//!
//! A session is a scheduled class led by a teacher. Its attendee list is
//! stored in the `participate` join table and returned as a flat list of
//! user ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};
use yogastudio_core::serde::deserialize_flexible_datetime;

use crate::ids::{SessionId, TeacherId, UserId};

/// A session with its attendee ids, ordered by user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    /// `None` once the leading teacher has been removed
    pub teacher_id: Option<TeacherId>,
    pub users: Vec<UserId>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn is_participating(&self, user_id: UserId) -> bool {
        self.users.contains(&user_id)
    }
}

/// Body for creating or replacing a session.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SessionDto {
    #[validate(
        length(max = 50, message = "name must be at most 50 characters"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    pub name: String,
    #[validate(
        length(max = 2500, message = "description must be at most 2500 characters"),
        custom(function = "not_blank", message = "description must not be blank")
    )]
    pub description: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    #[schema(value_type = String, example = "2025-12-10T09:00:00Z")]
    pub date: DateTime<Utc>,
    #[validate(required(message = "teacher_id is required"))]
    pub teacher_id: Option<TeacherId>,
    /// Attendee ids; unknown ids are ignored
    #[serde(default)]
    pub users: Option<Vec<UserId>>,
}

impl SessionDto {
    /// Attendee ids sorted with duplicates removed.
    pub fn attendee_ids(&self) -> Vec<UserId> {
        let mut ids = self.users.clone().unwrap_or_default();
        ids.sort();
        ids.dedup();
        ids
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
