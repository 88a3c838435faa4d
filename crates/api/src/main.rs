use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    stockroom_observability::init();

    let config = stockroom_api::config::Config::from_env();
    let app = stockroom_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("warehouse server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
