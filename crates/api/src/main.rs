use std::sync::Arc;

use gatehouse_api::{AppState, Config, build_router};
use gatehouse_store::AccessService;

#[tokio::main]
async fn main() {
    gatehouse_observability::init();

    let config = Config::from_env();

    let pool = gatehouse_store::connect(&config.database_url)
        .await
        .expect("failed to open database");
    let service = AccessService::new(pool);
    let state = Arc::new(AppState::new(service, config.admin_token, config.terms_path));

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
