use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let catalog = create_catalog_service(&config);
        AppState {
            config,
            catalog,
        }
    }

    pub fn with_catalog(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, Json<Value>);

pub const ERROR_TYPE: &str = "/api/v1/common-errors";

// builds a problem-detail body for the status
pub fn problem(status: StatusCode, detail: &str) -> Value {
    json!({
        "type": ERROR_TYPE,
        "title": status.canonical_reason().unwrap_or("Error"),
        "status": status.as_u16(),
        "detail": detail,
        "timestamp": Utc::now().to_rfc3339(),
    })
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    tracing::debug!(error = %err, "rejected request body");
    (StatusCode::BAD_REQUEST, Json(problem(StatusCode::BAD_REQUEST, format!("{}", err).as_str())))
}

// extractor rejections keep their status but get a problem-detail body
pub fn rejection_to_server_error(status: StatusCode, detail: String) -> ServerError {
    tracing::debug!(status = status.as_u16(), detail = detail.as_str(), "rejected request");
    (status, Json(problem(status, detail.as_str())))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::DuplicateKey { .. } => StatusCode::CONFLICT,
            CommandError::Conflict { .. } => StatusCode::CONFLICT,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = ?err, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), detail = err.message(), "request rejected");
        }
        let mut body = problem(status, err.message());
        if let CommandError::Conflict { books, .. } = err {
            body["books"] = json!(books);
        }
        (status, Json(body))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::books::dto::BookDto;
    use crate::core::command::CommandError;
    use crate::core::controller::{json_to_server_error, rejection_to_server_error, ServerError};

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let cases = vec![
            (CommandError::Validation { message: "Invalid ID: Id must be greater than 0".to_string(), reason_code: None }, StatusCode::BAD_REQUEST),
            (CommandError::NotFound { message: "No books found".to_string() }, StatusCode::NOT_FOUND),
            (CommandError::DuplicateKey { message: "Book already exists".to_string() }, StatusCode::CONFLICT),
            (CommandError::Serialization { message: "bad json".to_string() }, StatusCode::BAD_REQUEST),
            (CommandError::Runtime { message: "poisoned".to_string(), reason_code: None }, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            let detail = err.message().to_string();
            let (status, body): ServerError = err.into();
            assert_eq!(expected, status);
            assert_eq!(detail, body.0["detail"]);
            assert_eq!(expected.as_u16(), body.0["status"]);
            assert!(body.0["timestamp"].is_string());
        }
    }

    #[tokio::test]
    async fn test_should_include_conflicting_books() {
        let err = CommandError::Conflict {
            message: "Multiple books found".to_string(),
            books: vec![BookDto::new(11, "The Da Vinci Code", "Dan Brown", "Thriller", 4),
                        BookDto::new(16, "The Da Vinci Code", "Onwumere Bright", "Thriller", 5)],
        };
        let (status, body): ServerError = err.into();
        assert_eq!(StatusCode::CONFLICT, status);
        assert_eq!("Multiple books found", body.0["detail"]);
        assert_eq!("Conflict", body.0["title"]);
        assert_eq!(2, body.0["books"].as_array().map(|b| b.len()).unwrap_or(0));
        assert_eq!(16, body.0["books"][1]["id"]);
    }

    #[tokio::test]
    async fn test_should_map_rejections() {
        let (status, body) = rejection_to_server_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected request with `Content-Type: application/json`".to_string());
        assert_eq!(StatusCode::UNSUPPORTED_MEDIA_TYPE, status);
        assert_eq!("Unsupported Media Type", body.0["title"]);
        assert_eq!("/api/v1/common-errors", body.0["type"]);
    }

    #[tokio::test]
    async fn test_should_map_json_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("should fail");
        let (status, _) = json_to_server_error(err);
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }
}
