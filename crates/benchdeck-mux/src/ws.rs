//! Websocket transport over tokio-tungstenite.
//!
//! `open()` splits the stream: a writer task drains an mpsc command channel
//! into the sink, a reader task turns inbound frames into
//! [`TransportEvent`]s. The [`WsTransport`] handle only touches the command
//! channel, so `send`/`close` stay synchronous and fire-and-forget.

use async_trait::async_trait;
use benchdeck_common::MuxError;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{Bytes, Message};

use crate::transport::{Connector, Transport, TransportEvent};

enum WsCommand {
    Text(String),
    Pong(Bytes),
    Close,
}

pub struct WsTransport {
    commands: mpsc::Sender<WsCommand>,
}

impl Transport for WsTransport {
    fn send(&mut self, text: String) -> bool {
        self.commands.try_send(WsCommand::Text(text)).is_ok()
    }

    fn close(&mut self) {
        let _ = self.commands.try_send(WsCommand::Close);
    }
}

/// Connects to `ws://<host>/ws`, the backend's single websocket path.
pub struct WsConnector {
    url: String,
}

impl WsConnector {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            url: format!("ws://{}/ws", host.into()),
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Connector for WsConnector {
    async fn open(
        &self,
    ) -> Result<(Box<dyn Transport>, mpsc::Receiver<TransportEvent>), MuxError> {
        let (ws, _) = connect_async(self.url.as_str())
            .await
            .map_err(|e| MuxError::ConnectFailed(e.to_string()))?;
        tracing::debug!(url = %self.url, "websocket handshake complete");

        let (mut sink, mut stream) = ws.split();
        let (cmd_tx, mut cmd_rx) = mpsc::channel::<WsCommand>(256);
        let (event_tx, event_rx) = mpsc::channel::<TransportEvent>(256);

        // Writer: command channel -> websocket sink.
        tokio::spawn(async move {
            while let Some(cmd) = cmd_rx.recv().await {
                let result = match cmd {
                    WsCommand::Text(text) => sink.send(Message::Text(text.into())).await,
                    WsCommand::Pong(data) => sink.send(Message::Pong(data)).await,
                    WsCommand::Close => {
                        let _ = sink.send(Message::Close(None)).await;
                        break;
                    }
                };
                if result.is_err() {
                    break;
                }
            }
        });

        // Reader: websocket stream -> transport events.
        let pong_tx = cmd_tx.clone();
        tokio::spawn(async move {
            while let Some(frame) = stream.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        if event_tx
                            .send(TransportEvent::Message(text.to_string()))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                    Ok(Message::Ping(data)) => {
                        let _ = pong_tx.try_send(WsCommand::Pong(data));
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        let _ = event_tx.send(TransportEvent::Error(e.to_string())).await;
                        break;
                    }
                }
            }
            let _ = event_tx.send(TransportEvent::Closed).await;
        });

        Ok((Box::new(WsTransport { commands: cmd_tx }), event_rx))
    }
}
