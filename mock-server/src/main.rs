use std::sync::Arc;

use mock_server::AuthStore;
use tokio::{net::TcpListener, sync::RwLock};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let email = std::env::var("MOCK_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
    let password = std::env::var("MOCK_PASSWORD").unwrap_or_else(|_| "demo".to_string());

    let db = Arc::new(RwLock::new(AuthStore::default().with_account(&email, &password)));
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}, login at http://{addr}/api/auth/login");
    mock_server::run(listener, db).await
}
