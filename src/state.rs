//! Shared application state for all routes. The repository is the only shared resource.

use crate::repository::AccountRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}
