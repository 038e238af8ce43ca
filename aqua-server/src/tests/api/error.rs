use crate::ApiError;

use aqua_core::ErrorLocation;
use aqua_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "name must not be blank".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_key() {
    let error = ApiError::Validation {
        message: "Invalid UUID format".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_conflict_returns_409_with_json_body() {
    let error = ApiError::Conflict {
        message: "Email already registered".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Email already registered");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert!(field.is_none());
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_duplicate_email_converts_to_conflict() {
    let db_err = DbError::DuplicateEmail {
        email: "ana@aqua.dev".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Conflict { message, .. } => {
            assert_eq!(message, "Email already registered");
        }
        _ => panic!("Expected Conflict error"),
    }
}

#[test]
fn test_db_not_found_converts_to_not_found() {
    let id = Uuid::new_v4();
    let db_err = DbError::NotFound {
        id,
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::NotFound { message, .. } => {
            assert!(message.contains(&id.to_string()));
        }
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_db_sqlx_converts_to_internal_without_details() {
    let db_err = DbError::from(sqlx::Error::PoolClosed);
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            // Clients only ever see the generic message
            assert_eq!(message, "Database operation failed");
        }
        _ => panic!("Expected Internal error"),
    }
}
