use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::config::ServiceConfig;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

/// Everything a request handler may depend on, built once at startup and
/// handed to every worker.
pub struct Container {
    pub service: ServiceConfig,
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(conn: Surreal<Client>, service: ServiceConfig) -> Self {
        let db = Arc::new(conn);

        Container::with_repository(service, Arc::new(AccountRepositoryImpl::new(db)))
    }

    pub fn with_repository(
        service: ServiceConfig,
        account_repository: Arc<dyn AccountRepository>,
    ) -> Self {
        Container {
            service,
            account_service: Arc::new(AccountServiceImpl::new(account_repository)),
        }
    }
}
