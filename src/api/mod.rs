use utoipa_actix_web::service_config::ServiceConfig;

mod controllers;
mod dto;
mod error;
mod middlewares;

pub use error::{not_found, path_config};

pub fn routes(cfg: &mut ServiceConfig) {
    controllers::health::routes(cfg);
    controllers::account::routes(cfg);
}
