use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::sync::Mutex;

use std::sync::Arc;

use crate::{LogSink, SubmissionSink, budget, cart, catalog, invoice, submit};
use engine::{Catalog, Session};

/// Shared state of the HTTP surface.
///
/// The server plans a single session: every handler takes the session lock
/// once and performs its whole check-then-change under it.
#[derive(Clone)]
pub struct ServerState {
    pub session: Arc<Mutex<Session>>,
    pub catalog: Arc<Catalog>,
    pub sink: Arc<dyn SubmissionSink>,
}

impl ServerState {
    /// State handing submissions to [`LogSink`].
    pub fn new(session: Session, catalog: Catalog) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            catalog: Arc::new(catalog),
            sink: Arc::new(LogSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn SubmissionSink>) -> Self {
        self.sink = sink;
        self
    }
}

pub fn router(state: ServerState) -> Router {
    let api = Router::new()
        .route("/catalog", get(catalog::get))
        .route("/cart", get(cart::get).delete(cart::clear))
        .route("/cart/items", post(cart::item_new))
        .route("/cart/items/remove", post(cart::remove_one))
        .route("/cart/designs", post(cart::design_select))
        .route("/cart/extras", post(cart::extra_select))
        .route("/budget", put(budget::update))
        .route("/invoice", get(invoice::get))
        .route("/invoice.csv", get(invoice::csv))
        .route("/invoice.txt", get(invoice::document))
        .route("/submit", post(submit::submit));

    Router::new().nest("/api", api).with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(state, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
