//! Account routes: collection at /account, single record at /account/:id.

use crate::handlers::account::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn account_routes(state: AppState) -> Router {
    Router::new()
        .route("/account", get(list).post(create))
        .route("/account/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
