use scenelens_api::setup;
use scenelens_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    // Initialize the application (telemetry, storage, services, routes)
    let (state, router) = setup::initialize_app(config.clone()).await?;

    // The sweeper runs independently of request handling
    let cleanup_handle = state.cleanup.clone().map(|cleanup| cleanup.start());

    setup::server::start_server(&config, router).await?;

    if let Some(handle) = cleanup_handle {
        handle.abort();
        tracing::info!("Upload cleanup task stopped");
    }

    Ok(())
}
