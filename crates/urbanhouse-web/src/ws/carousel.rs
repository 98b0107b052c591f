use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{Sink, SinkExt, Stream, StreamExt};
use urbanhouse_core::{CarouselCommand, CarouselHandle, CarouselSession};

use crate::dto::{CarouselQuery, ServerMessage};
use crate::state::AppState;

pub async fn carousel_handler(
    State(state): State<AppState>,
    Query(query): Query<CarouselQuery>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    // Without a width hint, lay out for a desktop viewport.
    let width = query
        .width
        .unwrap_or(state.config.site.carousel.breakpoints.large);
    ws.on_upgrade(move |socket| handle_carousel(socket, state, width))
}

async fn handle_carousel(socket: WebSocket, state: AppState, width: u32) {
    let (ws_sender, ws_receiver) = socket.split();

    let items: Vec<u32> = state.store.featured().iter().map(|p| p.id()).collect();
    let settings = &state.config.site.carousel;
    let handle = CarouselSession::spawn(
        settings.carousel_for(items.len(), width),
        settings.autoplay_period(),
    );

    relay(ws_sender, ws_receiver, handle, &items).await;
}

/// Pumps client commands into `handle` and view changes back out until
/// either side goes away, then shuts the session down.
async fn relay<S, R>(mut ws_sender: S, mut ws_receiver: R, handle: CarouselHandle, items: &[u32])
where
    S: Sink<Message, Error = axum::Error> + Unpin,
    R: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let mut views = handle.subscribe();

    let initial = ServerMessage::state(*views.borrow_and_update(), items);
    if send_json(&mut ws_sender, &initial).await.is_err() {
        handle.shutdown().await;
        return;
    }

    loop {
        tokio::select! {
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let msg = ServerMessage::state(*views.borrow_and_update(), items);
                if send_json(&mut ws_sender, &msg).await.is_err() {
                    break;
                }
            }
            ws_msg = ws_receiver.next() => {
                match ws_msg {
                    Some(Ok(Message::Text(text))) => match client_command(text.as_str()) {
                        Ok(Some(command)) => {
                            if !handle.send(command).await {
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(msg) => {
                            if send_json(&mut ws_sender, &msg).await.is_err() {
                                break;
                            }
                        }
                    },
                    Some(Ok(Message::Close(_))) | None => {
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::debug!("carousel socket error: {e}");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    handle.shutdown().await;
}

/// Decodes one client text frame.
///
/// `Ok(None)` means the frame is valid but ignored: autoplay ticks come from
/// the server's own timer only.
fn client_command(text: &str) -> Result<Option<CarouselCommand>, ServerMessage> {
    match serde_json::from_str::<CarouselCommand>(text) {
        Ok(CarouselCommand::Tick) => Ok(None),
        Ok(command) => Ok(Some(command)),
        Err(e) => Err(ServerMessage::Error {
            message: format!("invalid message: {e}"),
        }),
    }
}

async fn send_json<S>(sender: &mut S, msg: &ServerMessage) -> Result<(), axum::Error>
where
    S: Sink<Message, Error = axum::Error> + Unpin,
{
    let text = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(text.into())).await
}
