use actix_web::{HttpRequest, HttpResponse, web::PathConfig};
use tracing::debug;

use crate::domain::error::{AppError, AppResult, message};

pub type ApiResult = AppResult<HttpResponse>;

/// Unmatched routes and unparsable path segments answer with the same JSON
/// error body as every other handled error.
pub async fn not_found(req: HttpRequest) -> ApiResult {
    debug!(path = req.path(), "No route matched");

    Err(AppError::NotFound(message::NOT_FOUND))
}

pub fn path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| {
        debug!(path = req.path(), "Unparsable path segment: {err}");

        AppError::NotFound(message::NOT_FOUND).into()
    })
}
