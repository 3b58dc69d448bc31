use tokio::net::TcpListener;
use todo_store::TodoStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:todos.db".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");

    let store = TodoStore::connect(&database_url).await?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %database_url, "todo service listening");

    todo_server::run(listener, store).await?;
    Ok(())
}
