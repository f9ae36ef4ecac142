use engine::{Currency, Money, Session};
use server::ServerState;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "planner={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let currency = Currency::try_from(settings.ledger.currency.as_str())?;
    let budget: Money = settings.ledger.budget.parse()?;
    let session = Session::new(budget)?;
    tracing::info!(%currency, budget = %budget, "session ready");

    let catalog = settings.load_catalog()?;
    tracing::info!(rooms = catalog.rooms.len(), "catalog loaded");

    let listener = tokio::net::TcpListener::bind(settings.address()).await?;
    server::run_with_listener(ServerState::new(session, catalog), listener).await?;

    Ok(())
}
