use server::ServerState;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "prosper={level},server={level},advisor={level}",
            level = settings.app.level
        ))
        .init();

    if let Some(server) = settings.server {
        tracing::info!("Found server settings...");
        let bind = server.bind.unwrap_or_else(|| "127.0.0.1".to_string());
        let addr = format!("{}:{}", bind, server.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;

        let state = ServerState::default();
        if let Err(err) = server::run_with_listener(state, listener).await {
            tracing::error!("server failed: {err}");
        }
    } else {
        tracing::warn!("no server settings found, nothing to run");
    }

    Ok(())
}
