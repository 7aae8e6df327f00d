//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::UserId;

/// A registered account.
///
/// The email doubles as the login username. The password hash is loaded for
/// credential checks and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    #[serde(skip)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_never_serializes_password() {
        let now = Utc::now();
        let user = User {
            id: UserId::new(1),
            email: "yoga@studio.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            admin: true,
            password: "$2b$12$hash".to_string(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["firstName"], "Admin");
        assert_eq!(value["admin"], true);
    }

    #[test]
    fn test_user_deserializes_without_password() {
        let json = r#"{"id":2,"email":"a@b.fr","firstName":"Ana","lastName":"Bel","admin":false,"createdAt":"2025-01-01T00:00:00Z","updatedAt":"2025-01-01T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new(2));
        assert!(user.password.is_empty());
    }
}
