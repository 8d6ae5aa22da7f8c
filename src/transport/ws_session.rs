use crate::app::config::GameConfig;
use crate::game::constants::EVENT_QUEUE_CAPACITY;
use crate::game::session::spawn_session;
use crate::protocol::{decode_client_message, encode_event};
use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::Instrument;

pub async fn handle_socket(socket: WebSocket, config: GameConfig) {
    let session_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("session", %session_id);
    serve_socket(socket, config).instrument(span).await;
}

async fn serve_socket(socket: WebSocket, config: GameConfig) {
    let (mut sender, mut receiver) = socket.split();
    let (events_tx, mut events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
    let (handle, mut game_task) = spawn_session(&config, events_tx);
    tracing::info!("session opened");

    let send_task = tokio::spawn(
        async move {
            while let Some(event) = events_rx.recv().await {
                let Some(payload) = encode_event(&event) else { continue };
                if sender.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }
        }
        .in_current_span(),
    );

    let finished = loop {
        tokio::select! {
            result = &mut game_task => break Some(result),
            incoming = receiver.next() => {
                let Some(Ok(message)) = incoming else { break None };
                match message {
                    Message::Text(text) => {
                        let Some(message) = decode_client_message(&text) else { continue };
                        if !handle.apply(message) {
                            break None;
                        }
                    }
                    Message::Close(_) => break None,
                    _ => {}
                }
            }
        }
    };

    drop(handle);
    let result = match finished {
        Some(result) => result,
        None => game_task.await,
    };
    if let Err(error) = result {
        tracing::warn!(?error, "game session task failed");
    }
    send_task.abort();
    tracing::info!("session closed");
}
