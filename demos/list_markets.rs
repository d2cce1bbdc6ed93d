use anyhow::Context;
use async_trait::async_trait;
use ddex_rust::{DdexClient, Signer};
use serde::Deserialize;
use serde_json::Value;
use url::Url;
use urlencoding::encode;

#[derive(Deserialize, Debug)]
struct Config {
    base_url: Option<Url>,
    account: Option<String>,
    /// Program invoked as `<sign_command> <message>`, printing the signature on stdout.
    sign_command: Option<String>,
    market_id: String,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("DDEX"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

/// Delegates signing to an external wallet program.
struct CommandSigner(Option<String>);

#[async_trait]
impl Signer for CommandSigner {
    async fn sign(&self, message: &str) -> anyhow::Result<String> {
        let program = self.0.as_deref().context("No sign_command configured")?;

        let output = tokio::process::Command::new(program)
            .arg(message)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", program))?;
        if !output.status.success() {
            anyhow::bail!("{} exited with {}", program, output.status);
        }

        Ok(String::from_utf8(output.stdout)?.trim().to_string())
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    let mut builder = DdexClient::builder(CommandSigner(config.sign_command));
    if let Some(base_url) = config.base_url {
        builder = builder.with_base_url(base_url);
    }
    if let Some(account) = config.account {
        builder = builder.with_account(account);
    }
    let ddex = builder.build();

    // Public endpoints, no signature required
    let markets: Value = ddex.get("markets", &(), false).await?;
    tracing::info!("Markets: {}", markets);

    let orderbook: Value = ddex
        .get(
            &format!("markets/{}/orderbook", encode(&config.market_id)),
            &[("level", 2)],
            false,
        )
        .await?;
    tracing::info!("Order book for {}: {}", config.market_id, orderbook);

    // Account endpoints need a signature
    if ddex.account().is_some() {
        match ddex
            .get::<Value, _>(
                "orders",
                &[("marketId", config.market_id.as_str()), ("status", "pending")],
                true,
            )
            .await
        {
            Ok(orders) => tracing::info!("Pending orders: {}", orders),
            Err(e) => tracing::warn!("Could not list pending orders: {}", e),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!("{:?}", e);
    }
}
