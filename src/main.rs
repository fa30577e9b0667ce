//! User Store Service Entry Point
//!
//! Loads configuration, connects to Redis, and serves the `/users` API.

use user_store::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
