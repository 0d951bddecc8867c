pub mod auth;
pub mod brief;
pub mod event;
pub mod favorite;
pub mod health;
pub mod list;
pub mod presentation;
pub mod upload;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                              live-sync WebSocket
///
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /lists                                           list, create
/// /lists/{id}                                      get, delete
/// /lists/{id}/clear                                clear submissions (POST)
/// /lists/{list_id}/submissions                     list (staff), create (public)
/// /lists/{list_id}/submissions/{id}                get, update, delete
/// /lists/{list_id}/submissions/{id}/audition-number  allocate (POST)
/// /lists/{list_id}/presentations                   snapshot favorites (POST)
///
/// /favorites                                       list, create
/// /favorites/{submission_id}                       remove (DELETE)
///
/// /briefs                                          list (staff), create
/// /briefs/{id}                                     get (public), delete
///
/// /presentations                                   list (staff)
/// /presentations/shared/{token}                    get (public read-only)
/// /presentations/{id}                              delete
///
/// /uploads/images                                  multipart image upload (public)
/// /uploads/video                                   multipart video upload (public)
///
/// /events                                          activity feed (staff, ?limit=)
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        // Live-sync WebSocket endpoint.
        .route("/ws", get(ws::ws_handler))
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Audition lists (also nests submissions and presentation creation).
        .nest("/lists", list::router())
        // Shortlist markers.
        .nest("/favorites", favorite::router())
        // Casting briefs.
        .nest("/briefs", brief::router())
        // Presentation index, shared lookup, delete.
        .nest("/presentations", presentation::router())
        // Multipart media intake.
        .nest("/uploads", upload::router(max_upload_bytes))
        // Change-journal activity feed.
        .nest("/events", event::router())
}
