use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: castdesk_db::DbPool,
    /// Server configuration (JWT settings, media storage, CORS).
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager for the live-sync feed.
    pub ws_manager: Arc<WsManager>,
    /// Centralized bus every mutation publishes its change event on.
    pub event_bus: Arc<castdesk_events::EventBus>,
}
