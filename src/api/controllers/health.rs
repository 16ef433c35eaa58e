use crate::api::dto::account::{HealthDTO, ServiceInfoDTO};
use crate::config::ServiceConfig as ServiceInfo;

use actix_web::{HttpResponse, Responder, get, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(health).service(index);
}

#[utoipa::path(
    responses((status = 200, body = HealthDTO, example = json!({ "status": "OK" }))),
    tag = "Service",
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthDTO {
        status: "OK".to_string(),
    })
}

#[utoipa::path(
    responses((status = 200, body = ServiceInfoDTO)),
    tag = "Service",
)]
#[get("/")]
pub async fn index(service: State<ServiceInfo>) -> impl Responder {
    HttpResponse::Ok().json(ServiceInfoDTO {
        name: service.name.to_owned(),
        version: service.version.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{
        App,
        http::StatusCode,
        test::{self, TestRequest},
        web,
    };
    use serde_json::{Value, json};
    use utoipa_actix_web::AppExt;

    use super::*;
    use crate::config::AppConfig;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .into_utoipa_app()
                .configure(routes)
                .into_app()
                .app_data(web::Data::new(AppConfig::default().service)),
        )
        .await;

        let res = TestRequest::get().uri(uri).send_request(&app).await;
        let status = res.status();

        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn test_health() {
        assert_eq!(
            get("/health").await,
            (StatusCode::OK, json!({ "status": "OK" }))
        );
    }

    #[actix_web::test]
    async fn test_index() {
        assert_eq!(
            get("/").await,
            (
                StatusCode::OK,
                json!({ "name": "Account REST API Service", "version": "1.0" })
            )
        );
    }
}
