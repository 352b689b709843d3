pub mod auth;
pub mod health;
pub mod sweets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /sweets                          list (public), create (auth)
/// /sweets/search                   search (public)
/// /sweets/categories/list          fixed category set (public)
/// /sweets/{id}                     get (public), update (owner/admin), delete (admin)
/// /sweets/{id}/purchase            purchase (auth)
/// /sweets/{id}/restock             restock (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/sweets", sweets::router())
}
