//! Create Checkout
//!
//! Creates a customer and a checkout for them in test mode, then prints the
//! payment page URL.
//!
//! ## Usage
//!
//! ```bash
//! # Configure through the environment or a .env file
//! export CHARGILY_API_KEY=test_sk_...
//! export CHARGILY_MODE=test
//!
//! RUST_LOG=chargily_pay=debug cargo run --example create_checkout
//! ```

use chargily::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!(kind = ?err.kind(), status = ?err.status_code(), "{}", err);
        for field in err.field_errors() {
            error!("  {}", field);
        }
        std::process::exit(1);
    }
}

async fn run() -> ChargilyResult<()> {
    let config = ChargilyConfig::from_dotenv()?;
    info!(mode = %config.mode, "Loaded configuration");

    let client = ChargilyClient::new(config)?;

    let balance = client.get_balance().await?;
    for wallet in &balance.wallets {
        info!(
            currency = %wallet.currency,
            balance = wallet.balance,
            ready = wallet.ready_for_payout,
            "Wallet"
        );
    }

    let customer = client
        .create_customer(
            &CreateCustomerParams::new("Amel Benali")
                .email("amel@example.dz")
                .phone("+213555000000"),
        )
        .await?;
    info!(id = %customer.id, "Created customer");

    let checkout = client
        .create_checkout(
            &CreateCheckoutParams::with_amount(2500, "dzd", "https://example.com/payments/success")
                .failure_url("https://example.com/payments/failure")
                .customer(customer.id.clone())
                .locale(Locale::Fr)
                .description("Order #1042"),
        )
        .await?;

    info!(
        id = %checkout.id,
        status = ?checkout.status,
        url = checkout.checkout_url.as_deref().unwrap_or("-"),
        "Created checkout"
    );

    let recent = client.list_checkouts(Some(PageParams::new(1, 5))).await?;
    info!(total = recent.total, shown = recent.len(), "Recent checkouts");

    Ok(())
}
