//! User handlers.
//!
//! One handler per (verb, path) pair of the users resource. Input is
//! validated by the extractors before any store access.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathId, ValidatedJson};
use crate::api::AppState;
use crate::config::{EMAIL_MAX_LENGTH, NAME_MAX_LENGTH};
use crate::domain::{NewUser, UserPatch, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[validate(length(min = 1, max = NAME_MAX_LENGTH, message = "Name must be between 1 and 50 characters"))]
    #[schema(example = "Ana", min_length = 1, max_length = 50)]
    pub name: String,
    /// User email address (must be unique)
    #[validate(length(max = EMAIL_MAX_LENGTH, message = "Email must be at most 100 characters"))]
    #[schema(example = "ana@x.com", max_length = 100)]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
        }
    }
}

/// User update request; omitted fields stay unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, max = NAME_MAX_LENGTH, message = "Name must be between 1 and 50 characters"))]
    #[schema(example = "Ana Maria", min_length = 1, max_length = 50)]
    pub name: Option<String>,
    /// New email address
    #[validate(length(max = EMAIL_MAX_LENGTH, message = "Email must be at most 100 characters"))]
    #[schema(example = "ana.maria@x.com", max_length = 100)]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            name: req.name,
            email: req.email,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/v1/usuarios",
    tag = "Clientes",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/v1/usuarios/{id}",
    tag = "Clientes",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid id")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/v1/usuarios",
    tag = "Clientes",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok(Created(UserResponse::from(user)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/v1/usuarios/{id}",
    tag = "Clientes",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update_user(id, payload.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user permanently
#[utoipa::path(
    delete,
    path = "/v1/usuarios/{id}",
    tag = "Clientes",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(State(state): State<AppState>, PathId(id): PathId) -> AppResult<NoContent> {
    state.user_service.delete_user(id).await?;
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_empty_name() {
        let req = CreateUserRequest {
            name: String::new(),
            email: "ana@x.com".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_enforces_length_limits() {
        let at_limit = CreateUserRequest {
            name: "a".repeat(NAME_MAX_LENGTH as usize),
            email: "e".repeat(EMAIL_MAX_LENGTH as usize),
        };
        assert!(at_limit.validate().is_ok());

        let too_long = CreateUserRequest {
            name: "a".repeat(NAME_MAX_LENGTH as usize + 1),
            email: "ana@x.com".to_string(),
        };
        assert!(too_long.validate().is_err());

        let long_email = CreateUserRequest {
            name: "Ana".to_string(),
            email: "e".repeat(EMAIL_MAX_LENGTH as usize + 1),
        };
        assert!(long_email.validate().is_err());
    }

    #[test]
    fn create_request_does_not_check_email_format() {
        let req = CreateUserRequest {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_request_validates_only_present_fields() {
        assert!(UpdateUserRequest::default().validate().is_ok());

        let blank_name = UpdateUserRequest {
            name: Some(String::new()),
            email: None,
        };
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn update_request_null_fields_mean_unchanged() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"name": null, "email": "ana@y.com"}"#).unwrap();
        let patch = UserPatch::from(req);

        assert_eq!(patch.name, None);
        assert_eq!(patch.email.as_deref(), Some("ana@y.com"));
    }
}
