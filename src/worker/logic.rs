use crate::protocol::{self, Envelope, TAG_RANGE};
use crate::worker::math;
use crate::worker::types::Worker;
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info};
use tokio_tungstenite::{connect_async, tungstenite::Message};

impl Worker {
    pub fn new(master_addr: String) -> Self {
        Self { master_addr }
    }

    /// Waits for one range assignment, sums it and reports back to the
    /// master. The worker writes nothing to stdout.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let url = format!("ws://{}", self.master_addr);
        info!("worker connecting to master at {}", url);

        let (mut stream, _) = connect_async(&url).await?;

        let (start, end) = recv_range(&mut stream).await?;
        let sum = math::range_sum(start, end);
        info!("worker summed [{}, {}] -> {}", start, end, sum);

        // The reply outcome is not reported anywhere; the worker is done
        // either way.
        let reply = serde_json::to_string(&protocol::pack_sum(sum))?;
        if let Err(e) = stream.send(Message::Text(reply.into())).await {
            error!("failed to send result: {}", e);
        }
        let _ = stream.close(None).await;
        Ok(())
    }
}

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Blocks until a range assignment arrives. Messages are accepted on the
/// basis of their tag alone, whoever the sender is; anything malformed or
/// foreign-tagged is skipped.
async fn recv_range(stream: &mut WsStream) -> Result<(i64, i64), Box<dyn std::error::Error>> {
    loop {
        let Some(msg) = stream.next().await else {
            return Err("master went away before assigning work".into());
        };
        match msg? {
            Message::Text(text) => match serde_json::from_str::<Envelope>(&text) {
                Ok(envelope) if envelope.tag == TAG_RANGE => {
                    match protocol::unpack_range(&envelope) {
                        Ok(range) => return Ok(range),
                        Err(e) => debug!("skipping malformed range message: {}", e),
                    }
                }
                Ok(envelope) => debug!("skipping message with tag {}", envelope.tag),
                Err(e) => debug!("skipping unparseable message: {}", e),
            },
            Message::Close(_) => {
                return Err("master closed the connection before assigning work".into())
            }
            _ => {} // ignore ping/pong/binary frames
        }
    }
}
