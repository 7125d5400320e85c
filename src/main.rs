use clap::Parser;
use gge4_client::{Credentials, GatewayClient, GatewayConfig};
use miette::{IntoDiagnostic, Result, miette};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the transaction fields (an object of name/value pairs)
    fields: PathBuf,

    /// Two-digit transaction type (00 purchase, 01 pre-auth, 04 refund, 13 void, ...)
    #[arg(long = "type", default_value = "00")]
    transaction_type: String,

    #[arg(long, env = "GGE4_GATEWAY_ID")]
    gateway_id: String,

    #[arg(long, env = "GGE4_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, env = "GGE4_HMAC_KEY", hide_env_values = true)]
    hmac_key: String,

    #[arg(long, env = "GGE4_KEY_ID")]
    key_id: String,

    /// Use the demo gateway instead of the live one
    #[arg(long)]
    test: bool,

    #[arg(long, default_value = gge4_client::config::DEFAULT_API_VERSION)]
    api_version: String,

    /// Override the gateway base URL (must end with '/')
    #[arg(long)]
    base_url: Option<String>,

    /// Total request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let contents = std::fs::read_to_string(&cli.fields).into_diagnostic()?;
    let fields: Map<String, Value> = serde_json::from_str(&contents)
        .map_err(|e| miette!("{} is not a JSON object of fields: {e}", cli.fields.display()))?;

    let config = GatewayConfig {
        api_version: cli.api_version,
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
        ..GatewayConfig::for_mode(cli.test)
    };
    let credentials = Credentials::new(cli.gateway_id, cli.password, cli.hmac_key, cli.key_id);
    let mut client = GatewayClient::with_config(credentials, config).into_diagnostic()?;

    client
        .set_transaction_type(cli.transaction_type.as_str())
        .set_fields(fields);

    match client.send().await {
        Ok(response) => {
            let decoded = serde_json::to_string_pretty(response.json()).into_diagnostic()?;
            println!("{decoded}");
            Ok(())
        }
        Err(e) => {
            if let Some(response) = client.last_response()
                && !response.json().is_empty()
            {
                let decoded = serde_json::to_string_pretty(response.json()).into_diagnostic()?;
                println!("{decoded}");
            }
            Err(miette!("Transaction failed ({}): {}", e.code(), e.message()))
        }
    }
}
