//! User domain entity and its projections.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Data required to insert a user; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// True when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "Ana")]
    pub name: String,
    /// User email address
    #[schema(example = "ana@x.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> User {
        User {
            id: 7,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
        }
    }

    #[test]
    fn patch_emptiness_tracks_present_fields() {
        assert!(UserPatch::default().is_empty());
        assert!(!UserPatch {
            name: Some("Ana Maria".to_string()),
            email: None,
        }
        .is_empty());
        assert!(!UserPatch {
            name: None,
            email: Some("ana.maria@x.com".to_string()),
        }
        .is_empty());
    }

    #[test]
    fn response_projects_all_fields() {
        let response = UserResponse::from(ana());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "name": "Ana", "email": "ana@x.com"}));
    }
}
