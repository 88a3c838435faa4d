use std::sync::Arc;

use axum::Router;

use crate::app::services::AppServices;
use crate::middleware::AuthState;

pub mod catalog;
pub mod items;
pub mod management;
pub mod orders;
pub mod payments;
pub mod profile;
pub mod system;
pub mod users;

/// Full routing table.
///
/// Authentication is a per-(method, path) property, so each area wires its
/// own guard layers instead of the tree being split into one public and
/// one protected subtree.
pub fn router(auth: &AuthState, services: &Arc<AppServices>) -> Router {
    Router::new()
        .merge(system::router())
        .merge(management::router(auth))
        .merge(items::router(auth))
        .merge(orders::router(auth, services))
        .merge(payments::router(auth))
        .merge(users::router(auth, services))
        .merge(profile::router())
        .merge(catalog::router())
}
