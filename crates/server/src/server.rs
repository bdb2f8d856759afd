use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::{net::TcpListener, sync::RwLock};

use advisor::{ExpenseBook, FundBoard};

use crate::{advice, expenses, funds, statistics};

/// Shared state: the in-memory expense book and fund board.
///
/// Persistence is a concern of the deployment glue; the handlers only see
/// these two stores behind read/write locks.
#[derive(Clone)]
pub struct ServerState {
    pub book: Arc<RwLock<ExpenseBook>>,
    pub funds: Arc<RwLock<FundBoard>>,
}

impl Default for ServerState {
    fn default() -> Self {
        Self {
            book: Arc::new(RwLock::new(ExpenseBook::with_default_categories())),
            funds: Arc::new(RwLock::new(FundBoard::new())),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/advisor/plan", post(advice::plan))
        .route(
            "/categories",
            get(expenses::list_categories).post(expenses::create_category),
        )
        .route("/categories/{id}", delete(expenses::remove_category))
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route("/expenses/export", get(expenses::export))
        .route("/expenses/{id}", delete(expenses::remove))
        .route("/statistics", get(statistics::get_stats))
        .route("/funds", get(funds::get_board))
        .route("/funds/deposit", post(funds::deposit))
        .route("/funds/categories", post(funds::create_category))
        .route("/funds/categories/{id}", delete(funds::remove_category))
        .route("/funds/allocate", post(funds::allocate))
        .route("/funds/withdraw", post(funds::withdraw))
        .with_state(state)
}

/// Serves the API on an already-bound listener.
pub async fn run_with_listener(
    state: ServerState,
    listener: TcpListener,
) -> Result<(), std::io::Error> {
    let app = router(state);
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
