use std::sync::Arc;

use word_counter::config::Config;
use word_counter::ingestion::pipeline::IngestionPipeline;
use word_counter::query::service::QueryService;
use word_counter::router::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!(
            "Usage: {} [--bind <addr:port>] [--data <path>] [--fetch-timeout-ms <n>] [--fetch-attempts <n>]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:5000 --data ./data/counts.bin", args[0]);
        return Ok(());
    }

    let config = Config::from_args(&args)?;

    // 1. Counter store:
    let store = config.open_store()?;
    match &config.data_path {
        Some(path) => tracing::info!("Counter store at {} ({} words)", path.display(), store.len()),
        None => tracing::info!("Counter store is in memory only"),
    }

    // 2. Services:
    let pipeline = IngestionPipeline::new(Arc::clone(&store), config.fetch_client());
    let queries = QueryService::new(store);

    // 3. HTTP router:
    let app = create_router(pipeline, queries);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
