//! Change-feed broadcaster: bridges the event bus onto WebSocket clients.
//!
//! Every [`ChangeEvent`] published by a handler is serialized to JSON and
//! pushed to all connected clients, mirroring the live-sync listeners the
//! back office previously bound to a hosted realtime database.

use std::sync::Arc;

use axum::extract::ws::Message;
use castdesk_events::ChangeEvent;
use tokio::sync::broadcast;

use crate::ws::manager::WsManager;

/// Spawn the feed task.
///
/// Subscribes to the event bus via the provided `receiver` and broadcasts
/// every event as a JSON text frame. The task exits when the bus sender is
/// dropped during shutdown.
pub fn start_change_feed(
    ws_manager: Arc<WsManager>,
    mut receiver: broadcast::Receiver<ChangeEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => {
                        ws_manager.broadcast(Message::Text(json.into())).await;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, event_type = %event.event_type,
                            "Failed to serialize change event");
                    }
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Change feed lagged, clients missed events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, change feed shutting down");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use castdesk_events::EventBus;

    #[tokio::test]
    async fn published_events_reach_connected_clients() {
        let manager = Arc::new(WsManager::new());
        let bus = EventBus::default();

        let mut client_rx = manager.add("client-1".to_string()).await;
        let feed = start_change_feed(Arc::clone(&manager), bus.subscribe());

        bus.publish(ChangeEvent::new("submission.created").with_source("submission", 5));

        let frame = client_rx.recv().await.expect("client should receive a frame");
        let Message::Text(text) = frame else {
            panic!("expected a text frame");
        };
        let json: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
        assert_eq!(json["event_type"], "submission.created");
        assert_eq!(json["source_entity_id"], 5);

        drop(bus);
        let _ = feed.await;
    }
}
