use hr_server::{Config, Server, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first, then logging, then config-driven startup.
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        config.log_level.as_deref(),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!("HR management server starting...");

    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
