// Route exports
pub mod swipes;
pub mod users;

use crate::services::{AffinityLedger, StorageClient, UserDirectory};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserDirectory,
    pub affinity: AffinityLedger,
    pub storage: Arc<StorageClient>,
}

/// Routes are mounted at the root with their historical paths; clients
/// depend on them verbatim.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(users::configure).configure(swipes::configure);
}
