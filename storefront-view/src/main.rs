use std::time::Duration;
use storefront_client::HttpStorefront;
use storefront_store::app_config::Config;
use storefront_view::{Action, ActionError, OrderDraft, Storefront};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "Commands: order | status | show | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_view=info,storefront_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    let timeout = config.client.request_timeout_ms.map(Duration::from_millis);
    let api = HttpStorefront::new(&config.client.base_url, timeout)?;
    tracing::info!("Storefront talking to {}", api.base_url());

    let draft = OrderDraft::new(config.storefront.customer_id.clone(), config.storefront.lines());
    let storefront = Storefront::new(api, draft);

    report(storefront.dispatch(Action::Mount).await?);
    println!("{}", storefront.screen().await);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "quit" | "exit" => break,
            "show" | "" => {}
            command => {
                match command.parse::<Action>() {
                    Ok(action) => press(&storefront, action),
                    Err(e) => eprintln!("{}. {}", e, HELP),
                }
                continue;
            }
        }
        println!("{}", storefront.screen().await);
    }

    storefront.unmount();
    Ok(())
}

/// Spawns the action and returns to reading input; the screen is printed
/// again once the action settles.
fn press(storefront: &Storefront<HttpStorefront>, action: Action) {
    let handle = storefront.dispatch(action);
    let storefront = storefront.clone();
    tokio::spawn(async move {
        match handle.await {
            Ok(outcome) => report(outcome),
            Err(e) => eprintln!("{:?} task failed: {}", action, e),
        }
        if storefront.is_visible() {
            println!("{}", storefront.screen().await);
        }
    });
}

// Fetch failures are already on screen as banners
fn report(outcome: Result<(), ActionError>) {
    match outcome {
        Ok(()) | Err(ActionError::Fetch(_)) => {}
        Err(e) => eprintln!("{}", e),
    }
}
