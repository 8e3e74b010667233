use std::sync::Arc;

use local_secrets::api::DynAPI;
use local_secrets::config::Config;
use local_secrets::db::PgPool;
use local_secrets::engine::Engine;
use local_secrets::error::Error;
use local_secrets::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let PgPool(pool) = PgPool::new(&config.database_url, config.max_connections).await?;

    let engine = Engine::new(pool, &config.jwt_secret).await?;

    serve(Arc::new(engine) as DynAPI, config.listen_addr).await
}
