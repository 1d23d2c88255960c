use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{Level, info};

use server::config::AppConfig;
use server::stage::StageTable;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let db_url = config.database.connect_url();
    let db = server::database::init_db(&db_url).await?;
    server::seed::ensure_indexes(&db).await?;

    let stages = Arc::new(StageTable::new(config.stages.clone())?);
    let images = server::image_store_from_config(&config.storage).await?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let state = AppState {
        db,
        config,
        stages,
        images,
    };
    let app = server::build_router(state);

    info!("Client portal listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
