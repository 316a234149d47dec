mod docs;
mod error;
mod info;
mod outage;
mod router;
mod state;

use std::env;

use dotenvy::dotenv;
use log::info;
use router::router;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_domain = env::var("SERVER_DOMAIN").unwrap_or("0.0.0.0:3000".to_string());

    let app = router().await?;

    let listener = tokio::net::TcpListener::bind(&server_domain).await?;
    info!("Listening on {}", server_domain);

    axum::serve(listener, app).await?;

    Ok(())
}
