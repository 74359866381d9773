use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use state::State;

pub mod dates;
pub mod db;
pub mod entity;
pub mod error;
pub mod forms;
mod routes;
pub mod state;
pub mod storage;
pub mod templates;

pub use axum;
pub use object_store;
pub use sea_orm;

pub fn construct_router(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(routes::home::index))
        .nest("/additem", routes::items::routes())
        .route("/receipt", get(routes::receipts::list_receipts))
        .route("/receipt_upload", get(routes::receipts::upload_receipt))
        .nest("/health", routes::health::routes())
        .with_state(state)
        .route("/version", get(|| async { env!("CARGO_PKG_VERSION") }))
        .layer(TraceLayer::new_for_http())
}
