use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::JsonPayloadError;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use serde::Serialize;
use utoipa::ToSchema;

use serde_json::{Map, Value, to_string};

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                message: message.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                message: $default.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub message: String,
    pub code: u16,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static NOT_FOUND: &str = "The server cannot find the requested resource";
    pub static BAD_REQUEST: &str = "The server would not process the request due to something the server considered to be a client error";
    pub static UNSUPPORTED_MEDIA_TYPE: &str = "Content-Type must be application/json";
    pub static INTERNAL_ERROR: &str = "The server encountered an unexpected condition that prevented it from fulfilling the request";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(BadRequest, StatusCode::BAD_REQUEST);
    static_error!(NotFound, StatusCode::NOT_FOUND);
    static_error!(UnsupportedMediaType, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // 2. Errors with Default Message
    static_error!(InternalError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    pub fn example_500() -> AppError {
        AppError::InternalError()
    }

    pub fn example_400() -> AppError {
        AppError::BadRequest("Json deserialize error: missing field `email` at line 1 column 17")
    }

    pub fn example_404() -> AppError {
        AppError::NotFound("Account with id 999 not found")
    }

    pub fn example_415() -> AppError {
        AppError::UnsupportedMediaType(message::UNSUPPORTED_MEDIA_TYPE)
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if let Some(trace) = &self.trace {
            tracing::error!(code = self.code, trace = %trace, "{}", self.message);
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = Map::new();

        for (field, error) in flatten_errors(&errors, None) {
            map.insert(field, Value::String(error.to_string()));
        }

        AppError::BadRequest(
            to_string(&map).unwrap_or_else(|_| message::BAD_REQUEST.to_string()),
        )
    }
}

fn flatten_errors(
    errors: &ValidationErrors,
    path: Option<String>,
) -> Vec<(String, &ValidationError)> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, err)| {
            let actual_path = path
                .as_ref()
                .map(|path| [path.as_str(), field].join("."))
                .unwrap_or_else(|| field.to_string());
            match err {
                ValidationErrorsKind::Field(field_errors) => field_errors
                    .iter()
                    .map(|error| (actual_path.clone(), error))
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::List(list_error) => list_error
                    .iter()
                    .flat_map(|(index, errors)| {
                        flatten_errors(errors, Some(format!("{actual_path}[{index}]")))
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::Struct(struct_errors) => {
                    flatten_errors(struct_errors, Some(actual_path))
                }
            }
        })
        .collect::<Vec<_>>()
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        match error {
            JsonPayloadError::ContentType => {
                AppError::UnsupportedMediaType(message::UNSUPPORTED_MEDIA_TYPE)
            }
            _ => AppError::BadRequest(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Contact {
        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,

        #[validate(email(message = "Invalid email format"))]
        email: String,

        #[validate(nested)]
        addresses: Vec<Address>,
    }

    #[derive(Debug, Validate)]
    struct Address {
        #[validate(length(min = 5, message = "Street must be at least 5 characters long"))]
        street: String,
    }

    #[test]
    fn test_validation_errors_become_bad_request() {
        let contact = Contact {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            addresses: vec![Address {
                street: "123".to_string(),
            }],
        };

        let app_error: AppError = contact.validate().unwrap_err().into();

        assert_eq!(app_error.code, 400);

        let message = serde_json::from_str::<serde_json::Value>(&app_error.message).unwrap();

        assert_eq!(
            message,
            json!({
                "addresses[0].street": "Street must be at least 5 characters long",
                "email": "Invalid email format",
                "name": "Name must not be empty"
            })
        );
    }

    #[test]
    fn test_nested_struct_errors_use_dotted_paths() {
        #[derive(Debug, Validate)]
        struct Wrapper {
            #[validate(nested)]
            address: Address,
        }

        let wrapper = Wrapper {
            address: Address {
                street: "1".to_string(),
            },
        };

        let app_error: AppError = wrapper.validate().unwrap_err().into();
        let message = serde_json::from_str::<serde_json::Value>(&app_error.message).unwrap();

        assert_eq!(
            message,
            json!({ "address.street": "Street must be at least 5 characters long" })
        );
    }

    #[test]
    fn test_default_messages_are_generic() {
        for text in [message::NOT_FOUND, message::BAD_REQUEST] {
            assert!(!text.contains("999"));
            assert!(!text.contains("email"));
        }

        assert_eq!(AppError::example_404().message, "Account with id 999 not found");
        assert!(AppError::example_400().message.contains("missing field `email`"));
        assert_eq!(AppError::example_400().code, 400);
    }

    #[test]
    fn test_content_type_payload_error_is_unsupported_media_type() {
        let app_error = AppError::from(JsonPayloadError::ContentType);

        assert_eq!(app_error.code, 415);
        assert_eq!(app_error.message, "Content-Type must be application/json");
    }

    #[test]
    fn test_repository_error_is_internal_and_keeps_trace() {
        let app_error = AppError::from(RepositoryError::InvalidId("account:abc".to_string()));

        assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_error.message, message::INTERNAL_ERROR);
        assert!(app_error.trace.unwrap().contains("account:abc"));
    }

    #[test]
    fn test_trace_is_not_serialized() {
        let app_error = AppError::NotFound("Account with id 7 not found").trace("lookup miss");

        assert_eq!(
            serde_json::to_value(&app_error).unwrap(),
            json!({ "message": "Account with id 7 not found", "code": 404 })
        );
    }
}
