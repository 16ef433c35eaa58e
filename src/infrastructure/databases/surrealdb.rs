use crate::config::SurrealDbConfig;

use include_dir::{Dir, include_dir};
use surrealdb::{
    Error, Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};
use surrealdb_migrations::MigrationRunner;
use tracing::info;

pub static SCHEMA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migration");

pub async fn connect(db_config: &SurrealDbConfig) -> Result<Surreal<Client>, Error> {
    let address = format!("{}:{}", db_config.host, db_config.port);
    let db = Surreal::new::<Ws>(address.as_str()).await?;

    db.signin(Root {
        username: db_config.username.as_str(),
        password: db_config.password.as_str(),
    })
    .await?;

    db.use_ns(db_config.namespace.as_str())
        .use_db(db_config.database.as_str())
        .await?;

    info!(
        %address,
        namespace = %db_config.namespace,
        database = %db_config.database,
        "Connected to SurrealDB"
    );

    Ok(db)
}

/// Applies the embedded account schema. Definitions are idempotent, so this
/// is safe on every start.
pub async fn apply_schema(db: &Surreal<Client>) -> Result<(), String> {
    MigrationRunner::new(db)
        .load_files(&SCHEMA_DIR)
        .up()
        .await
        .map_err(|err| err.to_string())
}
