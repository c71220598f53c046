//! ChainArena headless client - composition root binary.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chainarena_client::infrastructure::wallet::DevWallet;
use chainarena_client::ports::{NavigationPort, NotificationPort};
use chainarena_client::{ClientConfig, GameConnection};

/// Headless navigation: view switches are logged, nothing is rendered.
struct TracingNavigator;

impl NavigationPort for TracingNavigator {
    fn to_gameplay(&self) {
        tracing::info!("View change: gameplay");
    }

    fn to_home(&self) {
        tracing::info!("View change: home");
    }
}

/// Headless notifications: success notices are logged.
struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("Notice: {}", message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chainarena_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ChainArena client");

    let match_id = std::env::args()
        .nth(1)
        .context("usage: chainarena-client <match-id>")?
        .parse::<u64>()
        .context("match id must be an integer")?;

    let wallet_address = std::env::var("CHAINARENA_DEV_WALLET_ADDRESS")
        .unwrap_or_else(|_| "0x00000000000000000000000000000000c4a1a4e1".to_string());

    let connection = GameConnection::new(
        ClientConfig::from_env(),
        Arc::new(DevWallet::new(wallet_address)),
        Arc::new(TracingNavigator),
        Arc::new(TracingNotifier),
    );

    connection
        .on_receive_message(|message| {
            tracing::debug!("Server frame: {:?}", message);
        })
        .await;

    connection.connect(match_id).await?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    tracing::info!("Shutting down");
    connection.disconnect().await;

    Ok(())
}
