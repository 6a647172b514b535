use anyhow::Result;
use todo_htmx::{app, repository::TodoStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let store = TodoStore::open("db")?;
    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on http://localhost:3000");
    axum::serve(listener, app(store)).await?;
    Ok(())
}
