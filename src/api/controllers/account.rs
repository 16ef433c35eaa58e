use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, AccountPayloadDTO};

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, delete, get,
    http::header,
    post, put,
    web::{Data as State, Path, Payload},
};
use tracing::info;

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create_account)
        .service(list_accounts)
        .service(read_account)
        .service(update_account)
        .service(delete_account);
}

fn location(req: &HttpRequest, id: i64) -> String {
    req.url_for("read_account", [id.to_string()])
        .map(|url| url.to_string())
        .unwrap_or_else(|_| format!("/accounts/{id}"))
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account created",
            headers(("Location" = String, description = "URL of the created account"))),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create_account(
    req: HttpRequest,
    payload: Json<AccountPayloadDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    info!("Request to create an Account");

    let account = account_service.create(payload.into_inner().into()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location(&req, account.id)))
        .json(AccountDTO::from(account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>, description = "All accounts, empty when none exist"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts")]
pub async fn list_accounts(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    info!("Request to list Accounts");

    let accounts = account_service.list().await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts/{id}")]
pub async fn read_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    info!(account_id = id, "Request to read an Account");

    let account = account_service.read(id).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO, description = "Account updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    req: HttpRequest,
    id: Path<i64>,
    payload: Payload,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    info!(account_id = id, "Request to update an Account");

    // An unknown id is reported before anything about the body.
    account_service.read(id).await?;

    let payload =
        Json::<AccountPayloadDTO>::from_request(&req, &mut payload.into_inner()).await?;

    let account = account_service
        .update(id, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account deleted, or it did not exist"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    info!(account_id = id, "Request to delete an Account");

    account_service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
