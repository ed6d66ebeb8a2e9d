//! Example: Fetching an account balance
//!
//! Reads credentials from the environment, signs a request and prints the
//! raw response body.
//!
//! # Setup
//!
//! ```bash
//! export NFSN_USERNAME=yourlogin
//! export NFSN_API_KEY=yourkey
//! export NFSN_ACCOUNT=A1B2-C3D4E5F6
//! RUST_LOG=nfsnapi_infra=debug cargo run -p nfsnapi-infra --example account_balance
//! ```

use nfsnapi_infra::{config, Credentials, RequestRunner};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let credentials =
        Credentials::new(std::env::var("NFSN_USERNAME")?, std::env::var("NFSN_API_KEY")?);
    let account = std::env::var("NFSN_ACCOUNT")?;

    let runner = RequestRunner::new(config::load()?)?;

    match runner.get(&credentials, &format!("/account/{account}/balance")).await {
        Ok(balance) => println!("Balance: {balance}"),
        Err(e) => {
            eprintln!("Request failed: {}", e.reason());
            if let Some(debug) = e.debug() {
                eprintln!("  debug: {debug}");
            }
        }
    }

    Ok(())
}
