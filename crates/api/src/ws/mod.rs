//! WebSocket infrastructure for the live-sync change feed.

pub mod feed;
pub mod handler;
pub mod heartbeat;
pub mod manager;

pub use feed::start_change_feed;
pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
